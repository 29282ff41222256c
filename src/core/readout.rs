use super::constants::{WAVE_GAIN, WAVE_PEAK_DECAY, WAVE_SAMPLE_COUNT};
use super::state::{CursorState, CursorVariant};
use std::collections::VecDeque;

// Scale applied to the cursor core by the overlay
pub const SCALE_PRESSED: f64 = 0.75;
pub const SCALE_DRAG: f64 = 1.25;
pub const SCALE_HIDDEN: f64 = 0.45;

#[inline]
pub fn overlay_scale(state: &CursorState) -> f64 {
    if !state.visible {
        return SCALE_HIDDEN;
    }
    if state.variant == CursorVariant::Press || state.is_pointer_down {
        SCALE_PRESSED
    } else if state.variant == CursorVariant::Drag {
        SCALE_DRAG
    } else {
        1.0
    }
}

#[inline]
pub fn overlay_translate(state: &CursorState) -> String {
    format!(
        "translate3d({}px, {}px, 0) translate3d(-50%, -50%, 0)",
        state.x, state.y
    )
}

/// Magnitude of the instantaneous (unsmoothed) velocity.
#[inline]
pub fn raw_velocity(state: &CursorState) -> f64 {
    state.vx.hypot(state.vy)
}

/// `(field, text)` pairs for the telemetry panel.
pub fn telemetry_rows(state: &CursorState) -> [(&'static str, String); 6] {
    [
        (
            "coordinates",
            format!("{}, {}", state.x.round(), state.y.round()),
        ),
        ("velocity", format!("{:.2} px/ms", raw_velocity(state))),
        ("pointer", state.pointer_type.to_string()),
        ("variant", state.variant.to_string()),
        (
            "pressed",
            if state.is_pointer_down { "yes" } else { "no" }.to_string(),
        ),
        (
            "target",
            state.active_target.as_deref().unwrap_or("none").to_string(),
        ),
    ]
}

/// Rolling history of pointer speed for the velocity wave graph.
#[derive(Clone, Debug)]
pub struct VelocityWave {
    samples: VecDeque<f64>,
}

impl Default for VelocityWave {
    fn default() -> Self {
        Self {
            samples: std::iter::repeat(0.0).take(WAVE_SAMPLE_COUNT).collect(),
        }
    }
}

impl VelocityWave {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a velocity magnitude (px/ms), dropping the oldest sample.
    pub fn push(&mut self, magnitude: f64) {
        let scaled = if magnitude.is_nan() {
            0.0
        } else {
            (magnitude * WAVE_GAIN).clamp(0.0, 1.0)
        };
        self.samples.pop_front();
        self.samples.push_back(scaled);
    }

    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Peak with older samples decayed away.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .fold(0.0_f64, |acc, &v| (acc * WAVE_PEAK_DECAY).max(v))
    }
}

/// Text for a setting's `<output>`: unscaled values print as-is, percent
/// sliders (`scale == 100`) as whole percentages, other scales rounded.
pub fn format_setting(value: f64, scale: f64) -> String {
    if scale == 1.0 {
        return format!("{value}");
    }
    let scaled = (value * scale).round();
    if scale == 100.0 {
        format!("{scaled}%")
    } else {
        format!("{scaled}")
    }
}
