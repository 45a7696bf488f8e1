// Like Option<T> in Rust, but the storage slot and the presence flag are managed by hand.
// Values are written into the slot and dropped in place, and reads come in a checked
// (Result returning) and an unchecked (caller promises presence) flavour.

use crate::{
    error::BadAccessError,
    marker::EmptyMarker,
    trace::slot_event
};
use std::{
    fmt::{ Debug, Display },
    mem::{ ManuallyDrop, MaybeUninit }
};

/// A container holding either one `T` or nothing.
///
/// `on` is true exactly when `value` holds a live `T`. The container owns that `T` and
/// drops it on [`reset`](Self::reset), on [`emplace`](Self::emplace) and when the
/// container itself is dropped. There is no `Clone`.
#[repr(C)]
pub struct OptionalValue<T> {
    value: MaybeUninit<T>,
    on: bool
}

impl<T> OptionalValue<T> {
    pub const fn new() -> Self { Self::new_inner(MaybeUninit::uninit(), false) }

    pub const fn empty(_marker: EmptyMarker) -> Self { Self::new() }

    /// Build the contained `T` from anything that converts into it.
    pub fn from_value<U>(value: U) -> Self
    where U: Into<T>
    {
        Self::new_inner(MaybeUninit::new(value.into()), true)
    }

    /// Build the contained `T` with `ctor`. Arguments for `T`'s constructor are passed
    /// through the closure's captures:
    ///
    /// ```
    /// use optional_slot::OptionalValue;
    /// let (w, h) = (3, 4);
    /// let area = OptionalValue::in_place(|| vec![0u8; w * h]);
    /// assert_eq!(area.value().map(|v| v.len()), Ok(12));
    /// ```
    pub fn in_place<F>(ctor: F) -> Self
    where F: FnOnce() -> T
    {
        Self::new_inner(MaybeUninit::new(ctor()), true)
    }

    const fn new_inner(value: MaybeUninit<T>, on: bool) -> Self {
        Self { value, on }
    }
}

impl<T> OptionalValue<T> {
    /// True while the slot holds a live value.
    pub fn has_value(&self) -> bool { self.on }

    /// Replace the contents with a `T` converted from `value`. See [`emplace_with`](Self::emplace_with).
    pub fn emplace<U>(&mut self, value: U) -> &mut T
    where U: Into<T>
    {
        self.emplace_with(|| value.into())
    }

    /// Drop the current value (if any), then construct a new one with `ctor`.
    ///
    /// The old value is gone before `ctor` runs. If `ctor` panics the container is left
    /// empty.
    pub fn emplace_with<F>(&mut self, ctor: F) -> &mut T
    where F: FnOnce() -> T
    {
        slot_event!(occupied = self.on, "emplace");
        self.reset();
        let new = self.value.write(ctor());
        self.on = true;
        new
    }

    /// Drop the current value. Does nothing when empty.
    pub fn reset(&mut self) {
        if self.on {
            // cleared first so a panicking Drop can't lead to a second drop
            self.on = false;
            slot_event!("reset");
            unsafe { self.value.assume_init_drop() };
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self.on {
            true => Some(unsafe { self.value.assume_init_ref() }),
            false => None
        }
    }
}

// checked access
impl<T> OptionalValue<T> {
    pub fn value(&self) -> Result<&T, BadAccessError> {
        match self.on {
            true => Ok(unsafe { self.value.assume_init_ref() }),
            false => Err(Self::bad_access())
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadAccessError> {
        match self.on {
            true => Ok(unsafe { self.value.assume_init_mut() }),
            false => Err(Self::bad_access())
        }
    }

    /// Move the contained value out, consuming the container.
    pub fn into_value(self) -> Result<T, BadAccessError> {
        match self.on {
            true => Ok(unsafe { self.into_value_unchecked() }),
            false => Err(Self::bad_access())
        }
    }

    fn bad_access() -> BadAccessError {
        slot_event!("checked access on empty OptionalValue");
        BadAccessError
    }
}

// unchecked access
//
// Callers must have established has_value() beforehand. Debug builds assert it; release
// builds don't check at all.
impl<T> OptionalValue<T> {
    /// # Safety
    /// The container must hold a value.
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.on, "Unchecked access on an empty OptionalValue");
        unsafe { self.value.assume_init_ref() }
    }

    /// # Safety
    /// The container must hold a value.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.on, "Unchecked access on an empty OptionalValue");
        unsafe { self.value.assume_init_mut() }
    }

    /// # Safety
    /// The container must hold a value.
    pub unsafe fn into_value_unchecked(self) -> T {
        debug_assert!(self.on, "Unchecked access on an empty OptionalValue");
        // the value is moved out, so the container's own Drop must not run
        let this = ManuallyDrop::new(self);
        unsafe { this.value.assume_init_read() }
    }

    /// Pointer to the slot. Only valid to dereference while `has_value()` is true.
    pub fn as_ptr(&self) -> *const T {
        debug_assert!(self.on, "Member access on an empty OptionalValue");
        self.value.as_ptr()
    }

    /// Pointer to the slot. Only valid to dereference while `has_value()` is true.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        debug_assert!(self.on, "Member access on an empty OptionalValue");
        self.value.as_mut_ptr()
    }
}

impl<T> Drop for OptionalValue<T> {
    fn drop(&mut self) {
        if self.on {
            unsafe { std::ptr::drop_in_place(self.value.as_mut_ptr()) };
        }
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self { Self::new() }
}

impl<T> From<T> for OptionalValue<T> {
    fn from(value: T) -> Self { Self::new_inner(MaybeUninit::new(value), true) }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(p) => Self::new_inner(MaybeUninit::new(p), true),
            None => Self::new()
        }
    }
}

impl<T> Debug for OptionalValue<T>
where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_option() {
            Some(v) => write!(f, "OptionalValue({:?})", v),
            None => write!(f, "OptionalValue(<empty>)"),
        }
    }
}

impl<T> Display for OptionalValue<T>
where T: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_option() {
            Some(v) => write!(f, "OptionalValue({})", v),
            None => write!(f, "OptionalValue(<empty>)"),
        }
    }
}
