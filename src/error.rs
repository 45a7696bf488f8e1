use std::fmt::Display;

// Returned by the checked accessors of OptionalValue when nothing is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BadAccessError;

impl BadAccessError {
    pub const MESSAGE: &'static str = "optional value: bad access";
}

impl Display for BadAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for BadAccessError {}
