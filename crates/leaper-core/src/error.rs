//! Error types for board construction and coordinate validation.

use std::fmt;

/// Errors arising from board construction or coordinate checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A board was requested with a negative width or length.
    NegativeDimension {
        width: i32,
        length: i32,
    },
    /// A coordinate is outside `[0, max]`.
    CellOutOfBounds {
        /// Which coordinate was checked (e.g. `"Target_Row"`).
        name: &'static str,
        /// The offending value.
        value: i32,
        /// Largest allowed value.
        max: i32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDimension { width, length } => write!(
                f,
                "provided negative board width/length. Width: {width}, Length: {length}"
            ),
            Self::CellOutOfBounds { name, value, max } => write!(
                f,
                "{name} provided is not within bounds. Value: {value}, max allowed: {max}, min allowed: 0"
            ),
        }
    }
}

impl std::error::Error for BoardError {}
