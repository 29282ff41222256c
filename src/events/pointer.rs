use super::listener::{Listener, Listeners};
use crate::core::{Changes, CursorEngine, CursorHandle, PointerKind, PointerSample};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window pointer events and document visibility into the engine.
///
/// Events that are not pointer events (or carry no usable data) are ignored.
pub fn wire_pointer_events(
    handle: &CursorHandle,
    window: &web::Window,
    document: &web::Document,
) -> Listeners {
    let mut listeners = Listeners::default();
    listeners.push(wire_pointermove(handle, window));
    listeners.push(wire_pointerdown(handle, window));
    listeners.push(wire_simple(handle, window, "pointerup", |e| e.pointer_up()));
    listeners.push(wire_simple(handle, window, "pointerenter", |e| {
        e.pointer_enter()
    }));
    listeners.push(wire_simple(handle, window, "pointerleave", |e| {
        e.pointer_leave()
    }));
    listeners.push(wire_visibility(handle, document));
    listeners
}

fn wire_pointermove(handle: &CursorHandle, window: &web::Window) -> Option<Listener> {
    let handle = handle.clone();
    Listener::new(window, "pointermove", true, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let sample = PointerSample {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
            kind: PointerKind::from(ev.pointer_type().as_str()),
            timestamp_ms: dom::now_ms(),
        };
        handle.update(|e| e.pointer_move(sample));
    })
}

fn wire_pointerdown(handle: &CursorHandle, window: &web::Window) -> Option<Listener> {
    let handle = handle.clone();
    Listener::new(window, "pointerdown", true, move |ev: web::Event| {
        let ts = ev.time_stamp();
        handle.update(|e| e.pointer_down(ts));
    })
}

fn wire_simple(
    handle: &CursorHandle,
    window: &web::Window,
    event: &'static str,
    op: fn(&mut CursorEngine) -> Changes,
) -> Option<Listener> {
    let handle = handle.clone();
    Listener::new(window, event, true, move |_ev: web::Event| {
        handle.update(op);
    })
}

fn wire_visibility(handle: &CursorHandle, document: &web::Document) -> Option<Listener> {
    let handle = handle.clone();
    let doc = document.clone();
    Listener::new(document, "visibilitychange", false, move |_ev: web::Event| {
        let hidden = doc.hidden();
        handle.update(|e| e.visibility_changed(hidden));
    })
}
