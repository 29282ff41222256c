use crate::core::style_vars::StyleVar;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `<html>` as an `HtmlElement`, the carrier of the cursor style variables.
#[inline]
pub fn root_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// High-resolution milliseconds on the same clock as event timestamps.
#[inline]
pub fn now_ms() -> f64 {
    instant::now()
}

pub fn write_style_vars(el: &web::HtmlElement, vars: &[StyleVar]) {
    let style = el.style();
    for var in vars {
        _ = style.set_property(var.name, &var.value);
    }
}

pub fn set_body_cursor(document: &web::Document, cursor: Option<&str>) {
    if let Some(body) = document.body() {
        let style = body.style();
        match cursor {
            Some(value) => {
                _ = style.set_property("cursor", value);
            }
            None => {
                _ = style.remove_property("cursor");
            }
        }
    }
}

pub fn set_body_attr(document: &web::Document, name: &str, value: &str) {
    if let Some(body) = document.body() {
        _ = body.set_attribute(name, value);
    }
}

/// All elements matching `selector`; an invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::debug!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}
