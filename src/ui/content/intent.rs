//! Intents that advance a load state.

use crate::error::PageError;
use crate::ui::mvi::Intent;

/// Events a source dispatches while loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadIntent<T> {
    /// A load has started.
    Begin,

    /// The load produced a value.
    Succeed(T),

    /// The load failed.
    Fail(PageError),

    /// Drop whatever was loaded and go back to idle.
    Reset,
}

impl<T: Send + 'static> Intent for LoadIntent<T> {}
