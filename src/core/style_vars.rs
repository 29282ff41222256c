use super::settings::CursorSettings;
use super::state::{CursorState, PointerKind};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// A root style custom property and its textual value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleVar {
    pub name: &'static str,
    pub value: String,
}

impl StyleVar {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }

    fn flag(name: &'static str, on: bool) -> Self {
        Self::new(name, if on { "1" } else { "0" })
    }
}

pub type StyleVars = SmallVec<[StyleVar; 12]>;

pub fn state_vars(state: &CursorState) -> StyleVars {
    let mut vars = StyleVars::new();
    vars.push(StyleVar::new("--cursor-x", format!("{}px", state.x)));
    vars.push(StyleVar::new("--cursor-y", format!("{}px", state.y)));
    vars.push(StyleVar::new("--cursor-vx", state.vx));
    vars.push(StyleVar::new("--cursor-vy", state.vy));
    vars.push(StyleVar::new("--cursor-variant", state.variant));
    vars.push(StyleVar::new(
        "--cursor-active-target",
        state.active_target.as_deref().unwrap_or(""),
    ));
    vars.push(StyleVar::flag("--cursor-visible", state.visible));
    vars.push(StyleVar::new("--cursor-smoothed-vx", state.smoothed_vx));
    vars.push(StyleVar::new("--cursor-smoothed-vy", state.smoothed_vy));
    vars.push(StyleVar::new("--cursor-speed", state.speed));
    vars.push(StyleVar::new("--cursor-angle", state.angle));
    vars.push(StyleVar::new("--cursor-oscillation", state.oscillation));
    vars
}

pub fn settings_vars(settings: &CursorSettings) -> StyleVars {
    let mut vars = StyleVars::new();
    vars.push(StyleVar::new("--cursor-parallax", settings.parallax_intensity));
    vars.push(StyleVar::flag("--cursor-magnetic", settings.magnetic));
    vars.push(StyleVar::flag("--cursor-spotlight", settings.spotlight));
    vars.push(StyleVar::flag("--cursor-trails", settings.trails));
    vars.push(StyleVar::new(
        "--cursor-particle-density",
        settings.particle_density,
    ));
    vars.push(StyleVar::new("--cursor-depth-strength", settings.depth_strength));
    vars.push(StyleVar::new("--cursor-flux-intensity", settings.flux_intensity));
    vars.push(StyleVar::new(
        "--cursor-ripple-strength",
        settings.ripple_strength,
    ));
    vars.push(StyleVar::new("--cursor-inertia", settings.inertia_intensity));
    vars.push(StyleVar::new("--cursor-drag", settings.drag_factor));
    vars.push(StyleVar::new(
        "--cursor-oscillation-depth",
        settings.oscillation_depth,
    ));
    vars
}

/// Body `cursor` value: the native cursor is hidden only for mice, touch and
/// pen keep the platform default.
#[inline]
pub fn body_cursor(kind: PointerKind) -> Option<&'static str> {
    match kind {
        PointerKind::Mouse => Some("none"),
        _ => None,
    }
}

/// Remembers what was last written so unchanged properties are skipped.
#[derive(Debug, Default)]
pub struct StyleMirror {
    written: FnvHashMap<&'static str, String>,
}

impl StyleMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter `vars` down to the ones whose value differs from the last
    /// write, recording them as written.
    pub fn diff(&mut self, vars: StyleVars) -> StyleVars {
        vars.into_iter()
            .filter(|var| {
                if self.written.get(var.name) == Some(&var.value) {
                    return false;
                }
                self.written.insert(var.name, var.value.clone());
                true
            })
            .collect()
    }

    pub fn forget(&mut self) {
        self.written.clear();
    }
}
