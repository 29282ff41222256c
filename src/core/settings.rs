use super::error::CursorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User-tunable knobs read by every cursor consumer.
///
/// The store never clamps: whatever a control writes is what consumers read.
/// Range enforcement belongs to the caller (slider bounds, the sampler's own
/// clamp of `inertia_intensity`, the integrator's clamp of the drag factor).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CursorSettings {
    pub parallax_intensity: f64,
    pub magnetic: bool,
    pub spotlight: bool,
    pub trails: bool,
    pub particle_density: f64,
    pub depth_strength: f64,
    pub flux_intensity: f64,
    pub ripple_strength: f64,
    pub inertia_intensity: f64,
    pub drag_factor: f64,
    pub oscillation_depth: f64,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            parallax_intensity: 12.0,
            magnetic: true,
            spotlight: true,
            trails: true,
            particle_density: 0.6,
            depth_strength: 0.75,
            flux_intensity: 0.65,
            ripple_strength: 0.7,
            inertia_intensity: 0.35,
            drag_factor: 0.18,
            oscillation_depth: 0.25,
        }
    }
}

/// Boolean settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    Magnetic,
    Spotlight,
    Trails,
}

impl Toggle {
    pub const ALL: [Toggle; 3] = [Toggle::Magnetic, Toggle::Spotlight, Toggle::Trails];

    pub fn name(self) -> &'static str {
        match self {
            Toggle::Magnetic => "magnetic",
            Toggle::Spotlight => "spotlight",
            Toggle::Trails => "trails",
        }
    }
}

/// Numeric settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tunable {
    ParallaxIntensity,
    ParticleDensity,
    DepthStrength,
    FluxIntensity,
    RippleStrength,
    InertiaIntensity,
    DragFactor,
    OscillationDepth,
}

impl Tunable {
    pub const ALL: [Tunable; 8] = [
        Tunable::ParallaxIntensity,
        Tunable::ParticleDensity,
        Tunable::DepthStrength,
        Tunable::FluxIntensity,
        Tunable::RippleStrength,
        Tunable::InertiaIntensity,
        Tunable::DragFactor,
        Tunable::OscillationDepth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tunable::ParallaxIntensity => "parallaxIntensity",
            Tunable::ParticleDensity => "particleDensity",
            Tunable::DepthStrength => "depthStrength",
            Tunable::FluxIntensity => "fluxIntensity",
            Tunable::RippleStrength => "rippleStrength",
            Tunable::InertiaIntensity => "inertiaIntensity",
            Tunable::DragFactor => "dragFactor",
            Tunable::OscillationDepth => "oscillationDepth",
        }
    }
}

/// A setting addressed by its external (camelCase) name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Toggle(Toggle),
    Tunable(Tunable),
}

impl SettingKey {
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::Toggle(t) => t.name(),
            SettingKey::Tunable(t) => t.name(),
        }
    }
}

impl FromStr for SettingKey {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(t) = Toggle::ALL.into_iter().find(|t| t.name() == s) {
            return Ok(SettingKey::Toggle(t));
        }
        Tunable::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .map(SettingKey::Tunable)
            .ok_or_else(|| CursorError::UnknownSetting(s.to_string()))
    }
}

impl CursorSettings {
    /// Defaults with the keys present in `json` replacing them.
    pub fn from_json_overrides(json: &str) -> Result<Self, CursorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_enabled(&self, key: Toggle) -> bool {
        match key {
            Toggle::Magnetic => self.magnetic,
            Toggle::Spotlight => self.spotlight,
            Toggle::Trails => self.trails,
        }
    }

    pub fn toggle(&mut self, key: Toggle) {
        let flag = match key {
            Toggle::Magnetic => &mut self.magnetic,
            Toggle::Spotlight => &mut self.spotlight,
            Toggle::Trails => &mut self.trails,
        };
        *flag = !*flag;
    }

    pub fn get(&self, key: Tunable) -> f64 {
        match key {
            Tunable::ParallaxIntensity => self.parallax_intensity,
            Tunable::ParticleDensity => self.particle_density,
            Tunable::DepthStrength => self.depth_strength,
            Tunable::FluxIntensity => self.flux_intensity,
            Tunable::RippleStrength => self.ripple_strength,
            Tunable::InertiaIntensity => self.inertia_intensity,
            Tunable::DragFactor => self.drag_factor,
            Tunable::OscillationDepth => self.oscillation_depth,
        }
    }

    pub fn set(&mut self, key: Tunable, value: f64) {
        let field = match key {
            Tunable::ParallaxIntensity => &mut self.parallax_intensity,
            Tunable::ParticleDensity => &mut self.particle_density,
            Tunable::DepthStrength => &mut self.depth_strength,
            Tunable::FluxIntensity => &mut self.flux_intensity,
            Tunable::RippleStrength => &mut self.ripple_strength,
            Tunable::InertiaIntensity => &mut self.inertia_intensity,
            Tunable::DragFactor => &mut self.drag_factor,
            Tunable::OscillationDepth => &mut self.oscillation_depth,
        };
        *field = value;
    }

    /// Flip a flag by name. Numeric names are rejected and leave the store
    /// untouched.
    pub fn toggle_named(&mut self, name: &str) -> Result<(), CursorError> {
        match name.parse::<SettingKey>()? {
            SettingKey::Toggle(t) => {
                self.toggle(t);
                Ok(())
            }
            SettingKey::Tunable(_) => Err(CursorError::NotToggle(name.to_string())),
        }
    }

    pub fn set_named(&mut self, name: &str, value: f64) -> Result<(), CursorError> {
        match name.parse::<SettingKey>()? {
            SettingKey::Tunable(t) => {
                self.set(t, value);
                Ok(())
            }
            SettingKey::Toggle(_) => Err(CursorError::NotTunable(name.to_string())),
        }
    }
}
