pub mod controls;
pub mod listener;
pub mod pointer;
pub mod targets;

pub use controls::wire_controls;
pub use listener::{Listener, Listeners};
pub use pointer::wire_pointer_events;
pub use targets::wire_targets;
