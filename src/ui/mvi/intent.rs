/// Marker trait for intents.
///
/// An intent is something that happened (a load started, a value arrived,
/// a request failed) and is fed to a reducer to produce the next state.
pub trait Intent: Send + 'static {}
