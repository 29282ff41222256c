use thiserror::Error;

/// Errors surfaced by the string-addressed parts of the cursor API.
///
/// The typed API (`Toggle`, `Tunable`, `CursorVariant`) cannot fail; these
/// only arise when names come from DOM attributes or JavaScript.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),

    #[error("setting `{0}` is numeric and cannot be toggled")]
    NotToggle(String),

    #[error("setting `{0}` is a flag and cannot be assigned a number")]
    NotTunable(String),

    #[error("unknown cursor variant `{0}`")]
    UnknownVariant(String),

    #[error("malformed settings override: {0}")]
    SettingsJson(#[from] serde_json::Error),

    #[error("cursor engine used before start()")]
    NotInstalled,
}
