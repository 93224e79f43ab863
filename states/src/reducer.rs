/// A state value whose only way to change is folding an event into it.
///
/// `reduce` consumes the old value and returns the next one, so every transition
/// replaces the whole state at once.
pub trait Reducer: Default + 'static {
    const TYPE: &'static str = "state";

    type Event: Send + 'static;

    fn reduce(self, event: Self::Event) -> Self;
}
