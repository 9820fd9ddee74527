//! Model-View-Intent (MVI) primitives.
//!
//! View state only changes by feeding an intent through a reducer; the
//! view reads the resulting state and reports taps back as new intents.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
