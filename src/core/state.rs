use super::error::CursorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Visual mode of the custom cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorVariant {
    #[default]
    Default,
    Link,
    Press,
    Drag,
    Inspect,
    Control,
}

impl CursorVariant {
    pub const ALL: [CursorVariant; 6] = [
        CursorVariant::Default,
        CursorVariant::Link,
        CursorVariant::Press,
        CursorVariant::Drag,
        CursorVariant::Inspect,
        CursorVariant::Control,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CursorVariant::Default => "default",
            CursorVariant::Link => "link",
            CursorVariant::Press => "press",
            CursorVariant::Drag => "drag",
            CursorVariant::Inspect => "inspect",
            CursorVariant::Control => "control",
        }
    }
}

impl fmt::Display for CursorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CursorVariant {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CursorVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CursorError::UnknownVariant(s.to_string()))
    }
}

/// Pointer modality reported by the host (`PointerEvent.pointerType`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
    Unknown,
}

impl PointerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PointerKind::Mouse => "mouse",
            PointerKind::Pen => "pen",
            PointerKind::Touch => "touch",
            PointerKind::Unknown => "unknown",
        }
    }
}

impl From<&str> for PointerKind {
    fn from(s: &str) -> Self {
        match s {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            "touch" => PointerKind::Touch,
            _ => PointerKind::Unknown,
        }
    }
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of everything the cursor consumers render from.
///
/// Values are replaced wholesale on every change; a consumer holding a clone
/// never observes a half-applied update.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub visible: bool,
    pub is_pointer_down: bool,
    pub pointer_type: PointerKind,
    pub variant: CursorVariant,
    pub active_target: Option<String>,
    pub last_click: f64,
    pub smoothed_vx: f64,
    pub smoothed_vy: f64,
    pub speed: f64,
    pub angle: f64,
    pub oscillation: f64,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            visible: false,
            is_pointer_down: false,
            pointer_type: PointerKind::Mouse,
            variant: CursorVariant::Default,
            active_target: None,
            last_click: 0.0,
            smoothed_vx: 0.0,
            smoothed_vy: 0.0,
            speed: 0.0,
            angle: 0.0,
            oscillation: 0.0,
        }
    }
}
