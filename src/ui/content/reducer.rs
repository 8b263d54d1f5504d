//! Reducer for load state transitions.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::LoadIntent;
use super::state::LoadState;

/// Reducer for [`LoadState`] transitions.
///
/// Every intent is accepted in every state. Ordering such as
/// `Idle → Loading → Success` is the source's business, not the reducer's.
pub struct LoadReducer<T>(PhantomData<T>);

impl<T> Reducer for LoadReducer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    type State = LoadState<T>;
    type Intent = LoadIntent<T>;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Begin => LoadState::Loading,
            LoadIntent::Succeed(value) => LoadState::Success(value),
            LoadIntent::Fail(error) => LoadState::Failed(error),
            LoadIntent::Reset => LoadState::Idle,
        }
    }
}
