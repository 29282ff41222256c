// Platform-independent pointer model. Nothing here touches web-sys, so the
// host-side tests under `tests/` include these files directly.
pub mod broadcast;
pub mod constants;
pub mod engine;
pub mod error;
pub mod handle;
pub mod kinematics;
pub mod readout;
pub mod sampler;
pub mod settings;
pub mod state;
pub mod style_vars;
pub mod target;

pub use broadcast::{Broadcaster, CursorSnapshot, Subscriber, Subscription};
pub use engine::{Changes, CursorEngine};
pub use error::CursorError;
pub use handle::CursorHandle;
pub use sampler::PointerSample;
pub use settings::{CursorSettings, SettingKey, Toggle, Tunable};
pub use state::{CursorState, CursorVariant, PointerKind};
