use super::broadcast::{Broadcaster, CursorSnapshot, Subscription};
use super::engine::{Changes, CursorEngine};
use super::error::CursorError;
use super::settings::{CursorSettings, Toggle, Tunable};
use super::state::{CursorState, CursorVariant};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared access point to the engine: reads, mutations and subscriptions.
///
/// Clones share one engine. Mutations run inside a short `borrow_mut` and
/// subscribers are notified after it ends, so a subscriber may freely call
/// back into the handle.
#[derive(Clone)]
pub struct CursorHandle {
    engine: Rc<RefCell<CursorEngine>>,
    broadcaster: Broadcaster,
}

impl CursorHandle {
    pub fn new(engine: CursorEngine) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
            broadcaster: Broadcaster::new(),
        }
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        self.engine.borrow().snapshot()
    }

    pub fn state(&self) -> CursorState {
        self.engine.borrow().state().clone()
    }

    pub fn settings(&self) -> CursorSettings {
        *self.engine.borrow().settings()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&CursorSnapshot, Changes) + 'static) -> Subscription {
        self.broadcaster.subscribe(Rc::new(subscriber))
    }

    pub fn subscriber_count(&self) -> usize {
        self.broadcaster.subscriber_count()
    }

    /// Apply `op` to the engine and broadcast whatever it changed.
    pub fn update(&self, op: impl FnOnce(&mut CursorEngine) -> Changes) -> Changes {
        let changes = {
            let mut engine = self.engine.borrow_mut();
            op(&mut *engine)
        };
        self.publish(changes);
        changes
    }

    pub fn try_update(
        &self,
        op: impl FnOnce(&mut CursorEngine) -> Result<Changes, CursorError>,
    ) -> Result<Changes, CursorError> {
        let changes = {
            let mut engine = self.engine.borrow_mut();
            op(&mut *engine)?
        };
        self.publish(changes);
        Ok(changes)
    }

    /// Re-send the current snapshot as if everything changed; used to prime
    /// freshly attached consumers.
    pub fn republish(&self) {
        self.publish(Changes::STATE | Changes::SETTINGS);
    }

    fn publish(&self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.broadcaster.publish(&snapshot, changes);
    }

    pub fn set_variant(&self, variant: CursorVariant) -> Changes {
        self.update(|e| e.set_variant(variant))
    }

    pub fn activate_target(&self, id: &str, variant: Option<CursorVariant>) -> Changes {
        log::debug!("[target] activate {id}");
        self.update(|e| e.activate_target(id, variant))
    }

    pub fn deactivate_target(&self, id: &str) -> Changes {
        let changes = self.update(|e| e.deactivate_target(id));
        if changes.is_empty() {
            log::debug!("[target] stale deactivate {id} ignored");
        }
        changes
    }

    pub fn toggle_setting(&self, key: Toggle) -> Changes {
        self.update(|e| e.toggle_setting(key))
    }

    pub fn set_setting(&self, key: Tunable, value: f64) -> Changes {
        self.update(|e| e.set_setting(key, value))
    }
}

thread_local! {
    static CURRENT: RefCell<Option<CursorHandle>> = const { RefCell::new(None) };
}

/// Make `handle` the process-wide engine, returning any previous one.
pub fn install(handle: CursorHandle) -> Option<CursorHandle> {
    CURRENT.with(|c| c.borrow_mut().replace(handle))
}

pub fn uninstall() -> Option<CursorHandle> {
    CURRENT.with(|c| c.borrow_mut().take())
}

pub fn try_current() -> Result<CursorHandle, CursorError> {
    CURRENT.with(|c| c.borrow().clone().ok_or(CursorError::NotInstalled))
}

/// The installed engine.
///
/// # Panics
/// When called before [`install`]. Reaching for the engine outside its
/// lifetime is a wiring bug, not a runtime condition.
pub fn current() -> CursorHandle {
    match try_current() {
        Ok(handle) => handle,
        Err(e) => panic!("{e}"),
    }
}
