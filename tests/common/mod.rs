// The main crate is wasm-only, so host tests include the pure `core` modules
// directly. Module names mirror `src/core/mod.rs` so `super::` paths resolve.
#![allow(dead_code)]

pub mod core {
    pub mod broadcast {
        include!("../../src/core/broadcast.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod engine {
        include!("../../src/core/engine.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod handle {
        include!("../../src/core/handle.rs");
    }
    pub mod kinematics {
        include!("../../src/core/kinematics.rs");
    }
    pub mod readout {
        include!("../../src/core/readout.rs");
    }
    pub mod sampler {
        include!("../../src/core/sampler.rs");
    }
    pub mod settings {
        include!("../../src/core/settings.rs");
    }
    pub mod state {
        include!("../../src/core/state.rs");
    }
    pub mod style_vars {
        include!("../../src/core/style_vars.rs");
    }
    pub mod target {
        include!("../../src/core/target.rs");
    }

    pub use broadcast::{Broadcaster, CursorSnapshot};
    pub use engine::{Changes, CursorEngine};
    pub use error::CursorError;
    pub use handle::CursorHandle;
    pub use sampler::PointerSample;
    pub use settings::{CursorSettings, SettingKey, Toggle, Tunable};
    pub use state::{CursorState, CursorVariant, PointerKind};
}

use self::core::{PointerKind, PointerSample};

/// Mouse sample at `(x, y)` taken at `t` ms.
pub fn mouse(x: f64, y: f64, t: f64) -> PointerSample {
    PointerSample {
        x,
        y,
        kind: PointerKind::Mouse,
        timestamp_ms: t,
    }
}
