//! An optional-value container with a hand-managed storage slot.
//!
//! [`OptionalValue`] holds at most one `T`. It is filled by its constructors or by
//! [`OptionalValue::emplace`] and emptied by [`OptionalValue::reset`]. Reads are either checked
//! ([`OptionalValue::value`], failing with [`BadAccessError`]) or unchecked
//! ([`OptionalValue::get_unchecked`], debug-asserted only).

pub mod error;
pub mod marker;
pub mod optional;
mod trace;

pub use error::BadAccessError;
pub use marker::{ EmptyMarker, EMPTY };
pub use optional::OptionalValue;
