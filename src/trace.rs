// Logging hooks. Compiled out unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
macro_rules! slot_event {
    ($($arg:tt)*) => { ::tracing::trace!(target: "optional_slot", $($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! slot_event {
    ($($arg:tt)*) => {};
}

pub(crate) use slot_event;
