use super::constants::{
    CHANGE_EPSILON, DRAG_COEFF, MAX_STEP_MULTIPLIER, NOMINAL_FRAME_MS, PHASE_BASE_RATE,
    PHASE_DEPTH_RATE, SPEED_EPSILON,
};
use super::settings::CursorSettings;
use super::state::CursorState;
use glam::DVec2;
use std::f64::consts::TAU;

/// Speed and direction of `v`, keeping `prev_angle` when `v` is ~zero.
#[inline]
pub fn heading(v: DVec2, prev_angle: f64) -> (f64, f64) {
    let speed = v.length();
    let angle = if speed > SPEED_EPSILON {
        v.y.atan2(v.x)
    } else {
        prev_angle
    };
    (speed, angle)
}

/// Frame time relative to a nominal 60 Hz frame, in `[0, MAX_STEP_MULTIPLIER]`.
#[inline]
pub fn step_multiplier(delta_ms: f64) -> f64 {
    let m = delta_ms / NOMINAL_FRAME_MS;
    if m.is_nan() {
        return 0.0;
    }
    m.clamp(0.0, MAX_STEP_MULTIPLIER)
}

/// Per-frame velocity retention; always within `[0, 1]` so drag can only
/// shrink the smoothed velocity.
#[inline]
pub fn drag_retention(settings: &CursorSettings, step: f64) -> f64 {
    let r = 1.0 - settings.drag_factor * DRAG_COEFF * step;
    if r.is_nan() {
        return 1.0;
    }
    r.clamp(0.0, 1.0)
}

#[inline]
fn negligible(a: f64, b: f64) -> bool {
    (a - b).abs() < CHANGE_EPSILON
}

/// Frame-driven half of the pointer model: drag decay plus a speed-driven
/// oscillator.
#[derive(Clone, Debug)]
pub struct Integrator {
    last_frame_ms: f64,
    phase: f64,
}

impl Integrator {
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_frame_ms: now_ms,
            phase: 0.0,
        }
    }

    /// Oscillator phase in `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance one animation frame.
    ///
    /// `smoothed` always receives the decayed velocity. A new state is
    /// returned only when the derived values moved by at least
    /// `CHANGE_EPSILON` relative to `prev`.
    pub fn step(
        &mut self,
        prev: &CursorState,
        smoothed: &mut DVec2,
        settings: &CursorSettings,
        timestamp_ms: f64,
    ) -> Option<CursorState> {
        if !timestamp_ms.is_finite() {
            return None;
        }
        let step = step_multiplier(timestamp_ms - self.last_frame_ms);
        self.last_frame_ms = timestamp_ms;

        *smoothed *= drag_retention(settings, step);
        let (speed, angle) = heading(*smoothed, prev.angle);

        let depth = settings.oscillation_depth;
        let advance = speed * (PHASE_BASE_RATE + depth * PHASE_DEPTH_RATE) * step;
        if advance.is_finite() {
            self.phase = (self.phase + advance).rem_euclid(TAU);
            // rem_euclid may round up to exactly TAU for tiny negatives
            if self.phase >= TAU {
                self.phase = 0.0;
            }
        }
        let oscillation = self.phase.sin() * depth;

        if negligible(smoothed.x, prev.smoothed_vx)
            && negligible(smoothed.y, prev.smoothed_vy)
            && negligible(speed, prev.speed)
            && negligible(oscillation, prev.oscillation)
        {
            return None;
        }

        Some(CursorState {
            smoothed_vx: smoothed.x,
            smoothed_vy: smoothed.y,
            speed,
            angle,
            oscillation,
            ..prev.clone()
        })
    }
}
