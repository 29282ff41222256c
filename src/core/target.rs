use super::state::{CursorState, CursorVariant};

/// Claim cursor focus for `id`. Last writer wins.
pub fn activate(prev: &CursorState, id: &str, variant: Option<CursorVariant>) -> CursorState {
    CursorState {
        active_target: Some(id.to_string()),
        variant: variant.unwrap_or(prev.variant),
        ..prev.clone()
    }
}

/// Release cursor focus held by `id`.
///
/// Compare-and-clear: when another target has taken over since `id` was
/// activated, the late release is dropped and `None` is returned.
pub fn deactivate(prev: &CursorState, id: &str) -> Option<CursorState> {
    if prev.active_target.as_deref() != Some(id) {
        return None;
    }
    Some(CursorState {
        active_target: None,
        variant: CursorVariant::Default,
        ..prev.clone()
    })
}

pub fn with_variant(prev: &CursorState, variant: CursorVariant) -> CursorState {
    CursorState {
        variant,
        ..prev.clone()
    }
}
