use super::listener::{Listener, Listeners};
use crate::constants::{SETTING_ATTR, SETTING_OUTPUT_ATTR, SETTING_SCALE_ATTR};
use crate::core::readout::format_setting;
use crate::core::{CursorHandle, CursorSettings, SettingKey, Subscription, Toggle, Tunable};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BoundInput {
    input: web::HtmlInputElement,
    key: SettingKey,
    scale: f64,
}

struct BoundOutput {
    el: web::Element,
    key: Tunable,
    scale: f64,
}

fn scale_of(el: &web::Element) -> f64 {
    el.get_attribute(SETTING_SCALE_ATTR)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s != 0.0)
        .unwrap_or(1.0)
}

fn key_of(el: &web::Element, attr: &str) -> Option<SettingKey> {
    let name = el.get_attribute(attr)?;
    match name.parse::<SettingKey>() {
        Ok(key) => Some(key),
        Err(e) => {
            log::warn!("[controls] {e}");
            None
        }
    }
}

fn sync_input(bound: &BoundInput, settings: &CursorSettings) {
    match bound.key {
        SettingKey::Toggle(t) => bound.input.set_checked(settings.is_enabled(t)),
        SettingKey::Tunable(t) => {
            let shown = (settings.get(t) * bound.scale).round();
            bound.input.set_value(&shown.to_string());
        }
    }
}

fn sync_output(bound: &BoundOutput, settings: &CursorSettings) {
    bound
        .el
        .set_text_content(Some(&format_setting(settings.get(bound.key), bound.scale)));
}

/// Bind `data-setting` checkboxes and sliders to the settings store.
///
/// Checkboxes toggle a flag; sliders write `value / data-scale`. Inputs and
/// their `data-setting-output` readouts follow the store, including changes
/// made from JavaScript.
pub fn wire_controls(handle: &CursorHandle, document: &web::Document) -> (Listeners, Subscription) {
    let mut listeners = Listeners::default();
    let mut inputs = Vec::new();

    for el in dom::query_all(document, &format!("[{SETTING_ATTR}]")) {
        let Some(key) = key_of(&el, SETTING_ATTR) else {
            continue;
        };
        let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
            log::warn!("[controls] {} is bound but not an <input>", key.name());
            continue;
        };
        let scale = scale_of(&input);
        listeners.push(wire_input(handle, &input, key, scale));
        inputs.push(BoundInput { input, key, scale });
    }

    let outputs: Vec<BoundOutput> = dom::query_all(document, &format!("[{SETTING_OUTPUT_ATTR}]"))
        .into_iter()
        .filter_map(|el| match key_of(&el, SETTING_OUTPUT_ATTR)? {
            SettingKey::Tunable(key) => Some(BoundOutput {
                scale: scale_of(&el),
                el,
                key,
            }),
            SettingKey::Toggle(_) => None,
        })
        .collect();

    let settings = handle.settings();
    inputs.iter().for_each(|b| sync_input(b, &settings));
    outputs.iter().for_each(|b| sync_output(b, &settings));
    log::info!(
        "[controls] bound {} inputs, {} outputs",
        inputs.len(),
        outputs.len()
    );

    let subscription = handle.subscribe(move |snapshot, changes| {
        if !changes.settings {
            return;
        }
        inputs.iter().for_each(|b| sync_input(b, &snapshot.settings));
        outputs.iter().for_each(|b| sync_output(b, &snapshot.settings));
    });
    (listeners, subscription)
}

fn wire_input(
    handle: &CursorHandle,
    input: &web::HtmlInputElement,
    key: SettingKey,
    scale: f64,
) -> Option<Listener> {
    match key {
        SettingKey::Toggle(t) => wire_checkbox(handle, input, t),
        SettingKey::Tunable(t) => wire_slider(handle, input, t, scale),
    }
}

fn wire_checkbox(handle: &CursorHandle, input: &web::HtmlInputElement, key: Toggle) -> Option<Listener> {
    let handle = handle.clone();
    Listener::new(input, "change", true, move |_ev: web::Event| {
        handle.toggle_setting(key);
        log::debug!("[controls] toggled {}", key.name());
    })
}

fn wire_slider(
    handle: &CursorHandle,
    input: &web::HtmlInputElement,
    key: Tunable,
    scale: f64,
) -> Option<Listener> {
    let handle = handle.clone();
    let input_for_read = input.clone();
    Listener::new(input, "input", true, move |_ev: web::Event| {
        let raw = input_for_read.value_as_number();
        if !raw.is_finite() {
            return;
        }
        let value = raw / scale;
        handle.set_setting(key, value);
        log::debug!("[controls] {} = {}", key.name(), value);
    })
}
