/// Marker trait for view state.
///
/// States are replaced wholesale by reducers, start from `Default`
/// (fresh at every mount) and compare with `PartialEq` so callers can
/// tell whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
