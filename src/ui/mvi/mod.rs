//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Source ──Intent──→ Reducer ──→ State ──→ View
//!    ↑                                      │
//!    └──────────────── retry ───────────────┘
//! ```
//!
//! - **State**: value snapshot the view renders from
//! - **Intent**: event reported by whoever owns the state
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
