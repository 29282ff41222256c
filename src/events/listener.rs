use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`. Passive listeners promise
    /// never to call `preventDefault`, which keeps scrolling smooth.
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        let added = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        );
        if let Err(e) = added {
            log::warn!("[events] could not listen for {event}: {e:?}");
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Listeners owned together and torn down together.
#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn push(&mut self, listener: Option<Listener>) {
        if let Some(l) = listener {
            self.0.push(l);
        }
    }

    pub fn extend(&mut self, other: Listeners) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
