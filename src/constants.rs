/// DOM hooks the web front-end binds to.
///
/// Pages opt in by carrying these ids and data attributes; anything missing is
/// skipped at wiring time.
// Cursor overlay
pub const OVERLAY_ID: &str = "cursor-overlay";
pub const OVERLAY_CORE_SELECTOR: &str = ".cursor-core";

// Telemetry fields: <dd data-telemetry="velocity">
pub const TELEMETRY_ATTR: &str = "data-telemetry";

// Velocity wave bars: <span class="wave-bar"> inside .wave-graph
pub const WAVE_GRAPH_SELECTOR: &str = ".wave-graph";
pub const WAVE_BAR_SELECTOR: &str = ".wave-graph .wave-bar";

// Controls: <input data-setting="particleDensity" data-scale="100">
pub const SETTING_ATTR: &str = "data-setting";
pub const SETTING_SCALE_ATTR: &str = "data-scale";
pub const SETTING_OUTPUT_ATTR: &str = "data-setting-output";

// Focus targets: <section data-cursor-target="telemetry" data-cursor-variant="inspect">
pub const TARGET_ATTR: &str = "data-cursor-target";
pub const TARGET_VARIANT_ATTR: &str = "data-cursor-variant";

// Initial settings override on <html>
pub const SETTINGS_OVERRIDE_ATTR: &str = "data-cursor-settings";

// Set on <body> while the engine is live
pub const BODY_ACTIVE_ATTR: &str = "data-cursor-active";
