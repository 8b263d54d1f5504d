/// Marker trait for state a view renders from.
///
/// States are plain values: cloned into snapshots for rendering, compared to
/// detect changes, and defaulted to their initial variant.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
