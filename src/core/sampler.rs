use super::constants::{INERTIA_MAX, MIN_SAMPLE_INTERVAL_MS};
use super::kinematics::heading;
use super::settings::CursorSettings;
use super::state::{CursorState, CursorVariant, PointerKind};
use glam::DVec2;

/// One raw pointer-move reading in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub kind: PointerKind,
    pub timestamp_ms: f64,
}

/// Turns raw pointer positions into instantaneous and smoothed velocity.
#[derive(Clone, Debug)]
pub struct PointerSampler {
    last_pos: DVec2,
    last_ts: f64,
}

/// Exponential smoothing factor `k` for `smoothed = smoothed * k + v * (1 - k)`.
#[inline]
pub fn smoothing_factor(settings: &CursorSettings) -> f64 {
    let k = settings.inertia_intensity;
    if k.is_nan() {
        return 0.0;
    }
    k.clamp(0.0, INERTIA_MAX)
}

impl PointerSampler {
    /// Reference point is the viewport origin at `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_pos: DVec2::ZERO,
            last_ts: now_ms,
        }
    }

    /// Fold a move sample into `smoothed` and derive the next state.
    ///
    /// Returns `None` for samples with non-finite coordinates or timestamp;
    /// neither the sampler nor `smoothed` is touched in that case.
    pub fn sample(
        &mut self,
        prev: &CursorState,
        smoothed: &mut DVec2,
        sample: PointerSample,
        settings: &CursorSettings,
    ) -> Option<CursorState> {
        if !(sample.x.is_finite() && sample.y.is_finite() && sample.timestamp_ms.is_finite()) {
            return None;
        }
        let pos = DVec2::new(sample.x, sample.y);
        let dt = (sample.timestamp_ms - self.last_ts).max(MIN_SAMPLE_INTERVAL_MS);
        let v = (pos - self.last_pos) / dt;
        self.last_pos = pos;
        self.last_ts = sample.timestamp_ms;

        let k = smoothing_factor(settings);
        *smoothed = *smoothed * k + v * (1.0 - k);
        let (speed, angle) = heading(*smoothed, prev.angle);

        Some(CursorState {
            x: pos.x,
            y: pos.y,
            vx: v.x,
            vy: v.y,
            smoothed_vx: smoothed.x,
            smoothed_vy: smoothed.y,
            speed,
            angle,
            pointer_type: sample.kind,
            visible: true,
            ..prev.clone()
        })
    }
}

pub fn press(prev: &CursorState, timestamp_ms: f64) -> CursorState {
    let variant = if prev.variant == CursorVariant::Drag {
        CursorVariant::Drag
    } else {
        CursorVariant::Press
    };
    CursorState {
        is_pointer_down: true,
        last_click: timestamp_ms,
        variant,
        ..prev.clone()
    }
}

pub fn release(prev: &CursorState) -> CursorState {
    let variant = if prev.variant == CursorVariant::Press {
        CursorVariant::Default
    } else {
        prev.variant
    };
    CursorState {
        is_pointer_down: false,
        variant,
        ..prev.clone()
    }
}

pub fn enter(prev: &CursorState) -> CursorState {
    CursorState {
        visible: true,
        ..prev.clone()
    }
}

// Leaving the window drops any transient mode; the active target is left for
// its owner to clear.
pub fn leave(prev: &CursorState) -> CursorState {
    CursorState {
        visible: false,
        variant: CursorVariant::Default,
        ..prev.clone()
    }
}

pub fn visibility(prev: &CursorState, document_hidden: bool) -> CursorState {
    CursorState {
        visible: !document_hidden,
        ..prev.clone()
    }
}
