use crate::constants::{
    OVERLAY_CORE_SELECTOR, OVERLAY_ID, TELEMETRY_ATTR, WAVE_BAR_SELECTOR, WAVE_GRAPH_SELECTOR,
};
use crate::core::readout::{overlay_scale, overlay_translate, raw_velocity, telemetry_rows, VelocityWave};
use crate::core::{CursorHandle, CursorSnapshot, Subscription};
use crate::dom;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

fn as_html(el: web::Element) -> Option<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Drive the custom cursor element `#cursor-overlay` from the broadcast.
pub fn attach_cursor_overlay(handle: &CursorHandle, document: &web::Document) -> Option<Subscription> {
    let root = document.get_element_by_id(OVERLAY_ID).and_then(as_html)?;
    let core = root
        .query_selector(OVERLAY_CORE_SELECTOR)
        .ok()
        .flatten()
        .and_then(as_html);

    let render = move |snapshot: &CursorSnapshot| {
        let state = &snapshot.state;
        _ = root.style().set_property("transform", &overlay_translate(state));
        if let Some(core) = &core {
            let scale = format!("scale({})", overlay_scale(state));
            _ = core.style().set_property("transform", &scale);
        }
        _ = root.set_attribute("data-visible", flag(state.visible));
        _ = root.set_attribute("data-variant", state.variant.as_str());
        _ = root.set_attribute("data-spotlight", flag(snapshot.settings.spotlight));
        _ = root.set_attribute("data-trails", flag(snapshot.settings.trails));
    };
    render(&handle.snapshot());
    Some(handle.subscribe(move |snapshot, _changes| render(snapshot)))
}

/// Fill `[data-telemetry="<field>"]` elements with live readouts.
pub fn attach_telemetry(handle: &CursorHandle, document: &web::Document) -> Option<Subscription> {
    let fields: Vec<(String, web::Element)> = dom::query_all(document, &format!("[{TELEMETRY_ATTR}]"))
        .into_iter()
        .filter_map(|el| Some((el.get_attribute(TELEMETRY_ATTR)?, el)))
        .collect();
    if fields.is_empty() {
        return None;
    }

    let render = move |snapshot: &CursorSnapshot| {
        for (name, text) in telemetry_rows(&snapshot.state) {
            for (_, el) in fields.iter().filter(|(field, _)| field == name) {
                el.set_text_content(Some(&text));
            }
        }
    };
    render(&handle.snapshot());
    Some(handle.subscribe(move |snapshot, changes| {
        if changes.state {
            render(snapshot);
        }
    }))
}

/// Scroll the pointer speed through the `.wave-graph` bars.
pub fn attach_velocity_wave(handle: &CursorHandle, document: &web::Document) -> Option<Subscription> {
    let graph = document
        .query_selector(WAVE_GRAPH_SELECTOR)
        .ok()
        .flatten()
        .and_then(as_html)?;
    let bars: Vec<web::HtmlElement> = dom::query_all(document, WAVE_BAR_SELECTOR)
        .into_iter()
        .filter_map(as_html)
        .collect();
    let wave = RefCell::new(VelocityWave::new());
    let last_magnitude = RefCell::new(f64::NAN);

    Some(handle.subscribe(move |snapshot, changes| {
        if !changes.state {
            return;
        }
        let magnitude = raw_velocity(&snapshot.state);
        if *last_magnitude.borrow() == magnitude {
            return;
        }
        *last_magnitude.borrow_mut() = magnitude;

        let mut wave = wave.borrow_mut();
        wave.push(magnitude);
        for (bar, value) in bars.iter().zip(wave.samples()) {
            _ = bar.style().set_property("--wave-value", &value.to_string());
        }
        _ = graph
            .style()
            .set_property("--wave-peak", &wave.peak().to_string());
    }))
}
