#![cfg(target_arch = "wasm32")]
use crate::constants::{BODY_ACTIVE_ATTR, SETTINGS_OVERRIDE_ATTR};
use crate::core::{handle, CursorEngine, CursorHandle, CursorSettings, Subscription};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod api;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod mirror;
mod overlay;

pub use api::{cursor, CursorApi, CursorSubscription};

/// Everything that must be undone on teardown.
struct Runtime {
    document: web::Document,
    listeners: events::Listeners,
    subscriptions: Vec<Subscription>,
    frame: frame::FrameLoop,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

// Defaults, optionally overridden by a JSON object on <html data-cursor-settings>
fn initial_settings(root: &web::HtmlElement) -> CursorSettings {
    let Some(json) = root.get_attribute(SETTINGS_OVERRIDE_ATTR) else {
        return CursorSettings::default();
    };
    match CursorSettings::from_json_overrides(&json) {
        Ok(settings) => {
            log::info!("[settings] applied page overrides");
            settings
        }
        Err(e) => {
            log::warn!("[settings] {e}; using defaults");
            CursorSettings::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-playground starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    if RUNTIME.with(|r| r.borrow().is_some()) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = dom::root_element(&document).ok_or_else(|| anyhow::anyhow!("missing <html>"))?;

    let engine = CursorEngine::with_settings(initial_settings(&root), dom::now_ms());
    let handle = CursorHandle::new(engine);
    handle::install(handle.clone());

    let mut subscriptions = vec![mirror::attach_style_mirror(&handle, &document, root)];
    subscriptions.extend(overlay::attach_cursor_overlay(&handle, &document));
    subscriptions.extend(overlay::attach_telemetry(&handle, &document));
    subscriptions.extend(overlay::attach_velocity_wave(&handle, &document));

    let mut listeners = events::wire_pointer_events(&handle, &window, &document);
    listeners.extend(events::wire_targets(&handle, &document));
    let (control_listeners, control_sub) = events::wire_controls(&handle, &document);
    listeners.extend(control_listeners);
    subscriptions.push(control_sub);

    dom::set_body_attr(&document, BODY_ACTIVE_ATTR, "true");
    let frame = frame::start_loop(handle.clone());
    log::info!(
        "[init] {} listeners, {} subscribers",
        listeners.len(),
        handle.subscriber_count()
    );

    RUNTIME.with(|r| {
        *r.borrow_mut() = Some(Runtime {
            document,
            listeners,
            subscriptions,
            frame,
        })
    });
    Ok(())
}

/// Tear the playground down: stop the frame loop, drop every listener and
/// subscriber, restore the native cursor and forget the shared engine.
#[wasm_bindgen]
pub fn stop() {
    let Some(mut runtime) = RUNTIME.with(|r| r.borrow_mut().take()) else {
        return;
    };
    runtime.frame.stop();
    runtime.listeners.clear();
    runtime.subscriptions.clear();
    dom::set_body_attr(&runtime.document, BODY_ACTIVE_ATTR, "false");
    dom::set_body_cursor(&runtime.document, None);
    handle::uninstall();
    log::info!("cursor-playground stopped");
}
