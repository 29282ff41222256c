use crate::core::style_vars::{body_cursor, settings_vars, state_vars, StyleMirror};
use crate::core::{CursorHandle, CursorSnapshot, PointerKind, Subscription};
use crate::dom;
use std::cell::{Cell, RefCell};
use web_sys as web;

/// Mirror state and settings onto `<html>` custom properties and hide the
/// native cursor while a mouse drives it.
///
/// Only properties whose text changed are written back to the DOM.
pub fn attach_style_mirror(
    handle: &CursorHandle,
    document: &web::Document,
    root: web::HtmlElement,
) -> Subscription {
    let mirror = RefCell::new(StyleMirror::new());
    let cursor_kind: Cell<Option<PointerKind>> = Cell::new(None);
    let document = document.clone();

    let render = move |snapshot: &CursorSnapshot, state: bool, settings: bool| {
        let mut mirror = mirror.borrow_mut();
        if state {
            let vars = mirror.diff(state_vars(&snapshot.state));
            dom::write_style_vars(&root, &vars);
            let kind = snapshot.state.pointer_type;
            if cursor_kind.get() != Some(kind) {
                cursor_kind.set(Some(kind));
                dom::set_body_cursor(&document, body_cursor(kind));
            }
        }
        if settings {
            let vars = mirror.diff(settings_vars(&snapshot.settings));
            dom::write_style_vars(&root, &vars);
        }
    };
    render(&handle.snapshot(), true, true);
    handle.subscribe(move |snapshot, changes| render(snapshot, changes.state, changes.settings))
}
