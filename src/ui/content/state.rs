//! Load state of an asynchronously fetched value.

use std::fmt;

use crate::error::PageError;
use crate::ui::mvi::UiState;

/// Where an asynchronous fetch currently stands.
///
/// Exactly one variant is active at a time and no history is kept: every
/// transition overwrites the previous state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,

    /// A load is in progress.
    Loading,

    /// The last load failed.
    Failed(PageError),

    /// The last load produced a value.
    Success(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> UiState for LoadState<T> where T: Clone + PartialEq + Send + 'static {}

/// Variant tag of a [`LoadState`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadTag {
    Idle,
    Loading,
    Failed,
    Success,
}

impl fmt::Display for LoadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadTag::Idle => "idle",
            LoadTag::Loading => "loading",
            LoadTag::Failed => "failed",
            LoadTag::Success => "success",
        };
        f.write_str(label)
    }
}

impl<T> LoadState<T> {
    pub fn tag(&self) -> LoadTag {
        match self {
            LoadState::Idle => LoadTag::Idle,
            LoadState::Loading => LoadTag::Loading,
            LoadState::Failed(_) => LoadTag::Failed,
            LoadState::Success(_) => LoadTag::Success,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Get the recorded error, if the state is `Failed`.
    pub fn error(&self) -> Option<&PageError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Get the loaded value, if the state is `Success`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }
}
