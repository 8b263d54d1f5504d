//! Data sources that own a load state.
//!
//! A source owns exactly one [`LoadState`] and the operation that advances
//! it. Views only read the state and ask for reloads.

pub mod cell;

pub use cell::{LoadCell, LoadTicket};

use tokio::sync::watch;

use crate::ui::content::LoadState;

/// Owner of an observable load state.
pub trait LoadSource: Send + Sync + 'static {
    /// Value produced by a successful load.
    type Output: Clone + Send + Sync + 'static;

    /// Snapshot of the current state.
    fn state(&self) -> LoadState<Self::Output>;

    /// Subscribe to state changes. The subscription ends when the receiver
    /// is dropped.
    fn subscribe(&self) -> watch::Receiver<LoadState<Self::Output>>;

    /// Start (or restart) loading.
    ///
    /// Safe to call repeatedly; a later call supersedes earlier ones.
    fn load(&self);
}
