/// Selects the empty constructor, see [`OptionalValue::empty`](crate::OptionalValue::empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyMarker;

/// The one `EmptyMarker` value, `OptionalValue::empty(EMPTY)`.
pub const EMPTY: EmptyMarker = EmptyMarker;
