// Host-side tests for what the web layer writes: root style variables,
// overlay transforms, telemetry text and the velocity wave.
mod common;

use common::core::readout::{
    format_setting, overlay_scale, overlay_translate, telemetry_rows, VelocityWave, SCALE_DRAG,
    SCALE_HIDDEN, SCALE_PRESSED,
};
use common::core::style_vars::{body_cursor, settings_vars, state_vars, StyleMirror, StyleVars};
use common::core::{CursorSettings, CursorState, CursorVariant, PointerKind};

fn lookup<'a>(vars: &'a StyleVars, name: &str) -> Option<&'a str> {
    vars.iter()
        .find(|v| v.name == name)
        .map(|v| v.value.as_str())
}

#[test]
fn default_state_vars() {
    let vars = state_vars(&CursorState::default());
    assert_eq!(vars.len(), 12);
    assert_eq!(lookup(&vars, "--cursor-x"), Some("0px"));
    assert_eq!(lookup(&vars, "--cursor-y"), Some("0px"));
    assert_eq!(lookup(&vars, "--cursor-visible"), Some("0"));
    assert_eq!(lookup(&vars, "--cursor-variant"), Some("default"));
    assert_eq!(lookup(&vars, "--cursor-active-target"), Some(""));
    assert_eq!(lookup(&vars, "--cursor-speed"), Some("0"));
}

#[test]
fn live_state_vars() {
    let state = CursorState {
        x: 120.5,
        y: 48.0,
        visible: true,
        variant: CursorVariant::Inspect,
        active_target: Some("telemetry".to_string()),
        oscillation: -0.25,
        ..CursorState::default()
    };
    let vars = state_vars(&state);
    assert_eq!(lookup(&vars, "--cursor-x"), Some("120.5px"));
    assert_eq!(lookup(&vars, "--cursor-y"), Some("48px"));
    assert_eq!(lookup(&vars, "--cursor-visible"), Some("1"));
    assert_eq!(lookup(&vars, "--cursor-variant"), Some("inspect"));
    assert_eq!(lookup(&vars, "--cursor-active-target"), Some("telemetry"));
    assert_eq!(lookup(&vars, "--cursor-oscillation"), Some("-0.25"));
}

#[test]
fn settings_vars_cover_every_knob() {
    let settings = CursorSettings {
        spotlight: false,
        ..CursorSettings::default()
    };
    let vars = settings_vars(&settings);
    assert_eq!(vars.len(), 11);
    assert_eq!(lookup(&vars, "--cursor-parallax"), Some("12"));
    assert_eq!(lookup(&vars, "--cursor-magnetic"), Some("1"));
    assert_eq!(lookup(&vars, "--cursor-spotlight"), Some("0"));
    assert_eq!(lookup(&vars, "--cursor-inertia"), Some("0.35"));
    assert_eq!(lookup(&vars, "--cursor-drag"), Some("0.18"));
    assert_eq!(lookup(&vars, "--cursor-oscillation-depth"), Some("0.25"));
}

#[test]
fn mirror_only_rewrites_changed_vars() {
    let mut mirror = StyleMirror::new();
    let mut state = CursorState::default();
    assert_eq!(mirror.diff(state_vars(&state)).len(), 12);
    assert!(mirror.diff(state_vars(&state)).is_empty());

    state.x = 30.0;
    state.visible = true;
    let changed = mirror.diff(state_vars(&state));
    let names: Vec<_> = changed.iter().map(|v| v.name).collect();
    assert_eq!(names, ["--cursor-x", "--cursor-visible"]);

    mirror.forget();
    assert_eq!(mirror.diff(state_vars(&state)).len(), 12);
}

#[test]
fn native_cursor_hidden_only_for_mouse() {
    assert_eq!(body_cursor(PointerKind::Mouse), Some("none"));
    assert_eq!(body_cursor(PointerKind::Touch), None);
    assert_eq!(body_cursor(PointerKind::Pen), None);
    assert_eq!(body_cursor(PointerKind::Unknown), None);
}

#[test]
fn overlay_scale_by_mode() {
    let mut state = CursorState::default();
    assert_eq!(overlay_scale(&state), SCALE_HIDDEN);

    state.visible = true;
    assert_eq!(overlay_scale(&state), 1.0);
    state.variant = CursorVariant::Drag;
    assert_eq!(overlay_scale(&state), SCALE_DRAG);
    state.is_pointer_down = true;
    assert_eq!(overlay_scale(&state), SCALE_PRESSED);
    state.is_pointer_down = false;
    state.variant = CursorVariant::Press;
    assert_eq!(overlay_scale(&state), SCALE_PRESSED);
}

#[test]
fn overlay_translate_centres_on_pointer() {
    let state = CursorState {
        x: 10.0,
        y: 20.5,
        ..CursorState::default()
    };
    assert_eq!(
        overlay_translate(&state),
        "translate3d(10px, 20.5px, 0) translate3d(-50%, -50%, 0)"
    );
}

#[test]
fn telemetry_text() {
    let state = CursorState {
        x: 12.4,
        y: 7.6,
        vx: 3.0,
        vy: 4.0,
        pointer_type: PointerKind::Pen,
        variant: CursorVariant::Link,
        ..CursorState::default()
    };
    let rows = telemetry_rows(&state);
    let get = |field: &str| {
        rows.iter()
            .find(|(name, _)| *name == field)
            .map(|(_, text)| text.as_str())
    };
    assert_eq!(get("coordinates"), Some("12, 8"));
    assert_eq!(get("velocity"), Some("5.00 px/ms"));
    assert_eq!(get("pointer"), Some("pen"));
    assert_eq!(get("variant"), Some("link"));
    assert_eq!(get("pressed"), Some("no"));
    assert_eq!(get("target"), Some("none"));
}

#[test]
fn wave_keeps_fixed_window() {
    let mut wave = VelocityWave::new();
    assert_eq!(wave.samples().count(), 64);
    assert_eq!(wave.peak(), 0.0);

    wave.push(0.005);
    wave.push(2.0);
    wave.push(f64::NAN);
    let samples: Vec<f64> = wave.samples().collect();
    assert_eq!(samples.len(), 64);
    assert!((samples[61] - 0.6).abs() < 1e-12);
    assert_eq!(samples[62], 1.0);
    assert_eq!(samples[63], 0.0);
}

#[test]
fn wave_peak_decays_with_age() {
    let mut wave = VelocityWave::new();
    wave.push(1.0);
    assert_eq!(wave.peak(), 1.0);
    wave.push(0.0);
    assert!((wave.peak() - 0.92).abs() < 1e-12);
}

#[test]
fn setting_output_text() {
    assert_eq!(format_setting(0.6, 100.0), "60%");
    assert_eq!(format_setting(12.0, 1.0), "12");
    assert_eq!(format_setting(0.25, 10.0), "3");
}
