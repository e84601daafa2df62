use std::any::Any;

/// A piece of client state that can live in a [`StateCtx`](crate::StateCtx).
///
/// States are plain data owned by the single UI thread. Widgets read them,
/// event handlers mutate them, nothing else holds a reference across frames.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
