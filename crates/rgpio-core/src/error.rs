//! Error types for rgpio-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pin index is outside the range served by the bank
    InvalidPin {
        /// The requested pin index
        pin: u32,
        /// Number of pins the bank serves
        count: usize,
    },
    /// The hardware read primitive for the pin failed
    ReadFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin { pin, count } => {
                write!(f, "invalid pin index {} (bank has {} pins)", pin, count)
            }
            Self::ReadFailed => write!(f, "hardware read failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
