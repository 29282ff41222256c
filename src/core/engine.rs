use super::broadcast::CursorSnapshot;
use super::error::CursorError;
use super::kinematics::Integrator;
use super::sampler::{self, PointerSample, PointerSampler};
use super::settings::{CursorSettings, Toggle, Tunable};
use super::state::{CursorState, CursorVariant};
use super::target;
use glam::DVec2;
use std::ops::{BitOr, BitOrAssign};

/// Which halves of the snapshot an operation replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    pub state: bool,
    pub settings: bool,
}

impl Changes {
    pub const NONE: Changes = Changes {
        state: false,
        settings: false,
    };
    pub const STATE: Changes = Changes {
        state: true,
        settings: false,
    };
    pub const SETTINGS: Changes = Changes {
        state: false,
        settings: true,
    };

    pub fn is_empty(self) -> bool {
        !self.state && !self.settings
    }
}

impl BitOr for Changes {
    type Output = Changes;

    fn bitor(self, rhs: Changes) -> Changes {
        Changes {
            state: self.state || rhs.state,
            settings: self.settings || rhs.settings,
        }
    }
}

impl BitOrAssign for Changes {
    fn bitor_assign(&mut self, rhs: Changes) {
        *self = *self | rhs;
    }
}

/// The process-wide pointer model.
///
/// Owns the published state and settings plus the sampler/integrator
/// bookkeeping that is not part of the snapshot (last sample, oscillator
/// phase, the live smoothed velocity). Every operation reports what it
/// replaced so the caller can notify subscribers once the engine borrow is
/// released.
#[derive(Clone, Debug)]
pub struct CursorEngine {
    state: CursorState,
    settings: CursorSettings,
    sampler: PointerSampler,
    integrator: Integrator,
    smoothed: DVec2,
}

impl CursorEngine {
    pub fn new(now_ms: f64) -> Self {
        Self::with_settings(CursorSettings::default(), now_ms)
    }

    pub fn with_settings(settings: CursorSettings, now_ms: f64) -> Self {
        Self {
            state: CursorState::default(),
            settings,
            sampler: PointerSampler::new(now_ms),
            integrator: Integrator::new(now_ms),
            smoothed: DVec2::ZERO,
        }
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn settings(&self) -> &CursorSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            state: self.state.clone(),
            settings: self.settings,
        }
    }

    /// Live smoothed velocity; may run ahead of the published state between
    /// notifications.
    pub fn smoothed_velocity(&self) -> DVec2 {
        self.smoothed
    }

    pub fn oscillator_phase(&self) -> f64 {
        self.integrator.phase()
    }

    fn replace(&mut self, next: CursorState) -> Changes {
        if next == self.state {
            return Changes::NONE;
        }
        self.state = next;
        Changes::STATE
    }

    // ---------------- Sampler ----------------
    pub fn pointer_move(&mut self, sample: PointerSample) -> Changes {
        match self
            .sampler
            .sample(&self.state, &mut self.smoothed, sample, &self.settings)
        {
            Some(next) => self.replace(next),
            None => Changes::NONE,
        }
    }

    pub fn pointer_down(&mut self, timestamp_ms: f64) -> Changes {
        let next = sampler::press(&self.state, timestamp_ms);
        self.replace(next)
    }

    pub fn pointer_up(&mut self) -> Changes {
        let next = sampler::release(&self.state);
        self.replace(next)
    }

    pub fn pointer_enter(&mut self) -> Changes {
        let next = sampler::enter(&self.state);
        self.replace(next)
    }

    pub fn pointer_leave(&mut self) -> Changes {
        let next = sampler::leave(&self.state);
        self.replace(next)
    }

    pub fn visibility_changed(&mut self, document_hidden: bool) -> Changes {
        let next = sampler::visibility(&self.state, document_hidden);
        self.replace(next)
    }

    // ---------------- Integrator ----------------
    pub fn frame(&mut self, timestamp_ms: f64) -> Changes {
        match self
            .integrator
            .step(&self.state, &mut self.smoothed, &self.settings, timestamp_ms)
        {
            Some(next) => self.replace(next),
            None => Changes::NONE,
        }
    }

    // ---------------- Targets ----------------
    pub fn set_variant(&mut self, variant: CursorVariant) -> Changes {
        let next = target::with_variant(&self.state, variant);
        self.replace(next)
    }

    pub fn activate_target(&mut self, id: &str, variant: Option<CursorVariant>) -> Changes {
        let next = target::activate(&self.state, id, variant);
        self.replace(next)
    }

    pub fn deactivate_target(&mut self, id: &str) -> Changes {
        match target::deactivate(&self.state, id) {
            Some(next) => self.replace(next),
            None => Changes::NONE,
        }
    }

    // ---------------- Settings ----------------
    pub fn toggle_setting(&mut self, key: Toggle) -> Changes {
        self.settings.toggle(key);
        Changes::SETTINGS
    }

    pub fn set_setting(&mut self, key: Tunable, value: f64) -> Changes {
        if self.settings.get(key) == value {
            return Changes::NONE;
        }
        self.settings.set(key, value);
        Changes::SETTINGS
    }

    pub fn toggle_named(&mut self, name: &str) -> Result<Changes, CursorError> {
        self.settings.toggle_named(name)?;
        Ok(Changes::SETTINGS)
    }

    pub fn set_named(&mut self, name: &str, value: f64) -> Result<Changes, CursorError> {
        let before = self.settings;
        self.settings.set_named(name, value)?;
        Ok(if before == self.settings {
            Changes::NONE
        } else {
            Changes::SETTINGS
        })
    }
}
