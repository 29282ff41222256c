/// Pointer sampling and frame integration tuning constants.
///
/// Times are in milliseconds and velocities in px/ms, matching the units of
/// DOM event timestamps and client coordinates.
// Sampler
pub const MIN_SAMPLE_INTERVAL_MS: f64 = 16.0; // floor for dt between pointer samples
pub const INERTIA_MAX: f64 = 0.95; // upper clamp for the smoothing factor

// Integrator
pub const NOMINAL_FRAME_MS: f64 = 16.67; // one 60 Hz frame
pub const MAX_STEP_MULTIPLIER: f64 = 3.0; // cap after tab suspension
pub const DRAG_COEFF: f64 = 0.08; // drag_factor -> per-frame velocity loss

// Oscillator phase advance per unit speed
pub const PHASE_BASE_RATE: f64 = 0.18;
pub const PHASE_DEPTH_RATE: f64 = 0.25;

// Below this speed the angle is held (atan2 is noise near zero)
pub const SPEED_EPSILON: f64 = 0.0001;
// Frames whose derived values move less than this publish nothing
pub const CHANGE_EPSILON: f64 = 0.0001;

// Velocity wave readout
pub const WAVE_SAMPLE_COUNT: usize = 64;
pub const WAVE_PEAK_DECAY: f64 = 0.92;
pub const WAVE_GAIN: f64 = 120.0; // px/ms -> 0..1 bar height
