use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place state transitions happen, and it must stay
/// a pure function: no I/O, no callbacks.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
