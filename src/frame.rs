use crate::core::CursorHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame-driven integrator loop.
///
/// The browser stops delivering frames to hidden tabs, so the loop idles
/// without any extra bookkeeping; the step clamp in the integrator absorbs
/// the long gap on return.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

fn request_frame(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(handle: CursorHandle) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let running_clone = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        pending_clone.set(None);
        running_clone.set(true);
        handle.update(|e| e.frame(timestamp));
        running_clone.set(false);
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick, &pending);

    FrameLoop {
        tick,
        pending,
        running,
    }
}

impl FrameLoop {
    /// Cancel the pending frame and release the callback.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        let Some(closure) = self.tick.borrow_mut().take() else {
            return;
        };
        if self.running.get() {
            // Stopped from inside a frame callback: the closure is still on
            // the stack and must outlive this call.
            closure.forget();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
