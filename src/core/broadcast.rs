use super::engine::Changes;
use super::settings::CursorSettings;
use super::state::CursorState;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Consistent view handed to every subscriber for one notification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CursorSnapshot {
    pub state: CursorState,
    pub settings: CursorSettings,
}

pub type Subscriber = Rc<dyn Fn(&CursorSnapshot, Changes)>;

/// Fan-out of snapshots to independent consumers.
///
/// Subscribers are called in registration order. The list is cloned before
/// dispatch, so a subscriber may subscribe, unsubscribe or publish again
/// without tripping the `RefCell`.
#[derive(Clone, Default)]
pub struct Broadcaster {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: Subscriber) -> Subscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn publish(&self, snapshot: &CursorSnapshot, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)(snapshot, changes);
        }
    }
}

/// Keeps a subscriber registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    subscriber: Subscriber,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
