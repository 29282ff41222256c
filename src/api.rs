use crate::core::{handle, CursorHandle, CursorVariant, Subscription};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| JsError::new(&format!("{:?}", e)))
}

/// JavaScript view of the shared cursor engine.
#[wasm_bindgen]
pub struct CursorApi {
    handle: CursorHandle,
}

/// Access the running engine. Throws when called before the module started.
#[wasm_bindgen]
pub fn cursor() -> Result<CursorApi, JsError> {
    let handle = handle::try_current()?;
    Ok(CursorApi { handle })
}

#[wasm_bindgen]
impl CursorApi {
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.handle.state())
    }

    pub fn settings(&self) -> Result<JsValue, JsError> {
        to_js(&self.handle.settings())
    }

    #[wasm_bindgen(js_name = activateTarget)]
    pub fn activate_target(&self, id: &str, variant: Option<String>) -> Result<(), JsError> {
        let variant = variant
            .map(|name| name.parse::<CursorVariant>())
            .transpose()?;
        self.handle.activate_target(id, variant);
        Ok(())
    }

    /// Returns whether `id` held focus (and was cleared).
    #[wasm_bindgen(js_name = deactivateTarget)]
    pub fn deactivate_target(&self, id: &str) -> bool {
        !self.handle.deactivate_target(id).is_empty()
    }

    #[wasm_bindgen(js_name = setVariant)]
    pub fn set_variant(&self, name: &str) -> Result<(), JsError> {
        let variant = name.parse::<CursorVariant>()?;
        self.handle.set_variant(variant);
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleSetting)]
    pub fn toggle_setting(&self, name: &str) -> Result<(), JsError> {
        self.handle.try_update(|e| e.toggle_named(name))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setSetting)]
    pub fn set_setting(&self, name: &str, value: f64) -> Result<(), JsError> {
        self.handle.try_update(|e| e.set_named(name, value))?;
        Ok(())
    }

    /// Call `callback(snapshot)` after every change until unsubscribed.
    pub fn subscribe(&self, callback: js_sys::Function) -> CursorSubscription {
        let inner = self.handle.subscribe(move |snapshot, _changes| {
            let arg = match to_js(snapshot) {
                Ok(v) => v,
                Err(_) => return,
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &arg) {
                log::error!("[api] subscriber threw: {:?}", e);
            }
        });
        CursorSubscription { inner: Some(inner) }
    }
}

#[wasm_bindgen]
pub struct CursorSubscription {
    inner: Option<Subscription>,
}

#[wasm_bindgen]
impl CursorSubscription {
    pub fn unsubscribe(&mut self) {
        self.inner.take();
    }
}
