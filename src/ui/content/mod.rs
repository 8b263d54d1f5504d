//! Async content view feature module.
//!
//! Renders different UI depending on where the load of some value stands.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `LoadState` enum
//! - `intent.rs` - Source events (Begin, Succeed, Fail, Reset)
//! - `reducer.rs` - State transitions
//! - `view.rs` - State-to-view mapping and the source-bound view
//! - `error_view.rs`, `spinner.rs`, `placeholder.rs` - Building blocks

mod error_view;
mod intent;
mod placeholder;
mod reducer;
mod spinner;
mod state;
mod view;

pub use error_view::{ErrorView, RetryHandler, RETRY_LABEL};
pub use intent::LoadIntent;
pub use placeholder::Placeholder;
pub use reducer::LoadReducer;
pub use spinner::{Spinner, SPINNER_FRAMES};
pub use state::{LoadState, LoadTag};
pub use view::{render_state, AsyncContentView, ContentView};
