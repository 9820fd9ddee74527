/// Marker trait for intents: a tap on a card control, a preview request,
/// anything that asks a reducer for a new state.
pub trait Intent: Send + 'static {}
