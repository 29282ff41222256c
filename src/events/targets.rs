use super::listener::{Listener, Listeners};
use crate::constants::{TARGET_ATTR, TARGET_VARIANT_ATTR};
use crate::core::{CursorHandle, CursorVariant};
use crate::dom;
use web_sys as web;

/// Give every `data-cursor-target` element cursor focus while hovered.
///
/// Enter claims the target (with the element's `data-cursor-variant`, if
/// any); leave releases it only if nothing else has claimed focus since.
pub fn wire_targets(handle: &CursorHandle, document: &web::Document) -> Listeners {
    let mut listeners = Listeners::default();
    for el in dom::query_all(document, &format!("[{TARGET_ATTR}]")) {
        let Some(id) = el.get_attribute(TARGET_ATTR).filter(|id| !id.is_empty()) else {
            continue;
        };
        let variant = el
            .get_attribute(TARGET_VARIANT_ATTR)
            .and_then(|name| match name.parse::<CursorVariant>() {
                Ok(v) => Some(v),
                Err(e) => {
                    log::warn!("[targets] {id}: {e}");
                    None
                }
            });

        let enter_handle = handle.clone();
        let enter_id = id.clone();
        listeners.push(Listener::new(&el, "pointerenter", true, move |_ev: web::Event| {
            enter_handle.activate_target(&enter_id, variant);
        }));

        let leave_handle = handle.clone();
        listeners.push(Listener::new(&el, "pointerleave", true, move |_ev: web::Event| {
            leave_handle.deactivate_target(&id);
        }));
    }
    log::info!("[targets] {} listeners", listeners.len());
    listeners
}
