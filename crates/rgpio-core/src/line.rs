//! Line-level types and the hardware read seam
//!
//! A [`LineReader`] wraps the platform's zero-argument read primitive for
//! one pin. Backends hand one reader per pin to [`crate::bank::Bank`],
//! which performs index dispatch.

use crate::error::Result;
use bitflags::bitflags;
use core::fmt;

/// Logic level of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Logic low (0)
    Low,
    /// Logic high (1)
    High,
}

impl Level {
    /// Raw integer representation: 0 for low, 1 for high
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// Interpret a raw integer: zero is low, anything else is high
    pub fn from_raw(raw: i32) -> Self {
        if raw == 0 {
            Self::Low
        } else {
            Self::High
        }
    }

    /// Boolean representation: `true` for high
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

bitflags! {
    /// Per-line attribute flags reported by a backend
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineFlags: u32 {
        /// Line value is inverted (active low)
        const ACTIVE_LOW     = 1 << 0;
        /// Internal pull-up bias is enabled
        const BIAS_PULL_UP   = 1 << 1;
        /// Internal pull-down bias is enabled
        const BIAS_PULL_DOWN = 1 << 2;
    }
}

impl Default for LineFlags {
    fn default() -> Self {
        LineFlags::empty()
    }
}

/// The hardware read primitive for a single pin
///
/// Implementations read the instantaneous logic level of one line. A read
/// must not change hardware state: repeated calls with unchanged hardware
/// return the same level.
pub trait LineReader {
    /// Read the current logic level of the line
    fn read(&mut self) -> Result<Level>;

    /// Attribute flags for this line
    fn flags(&self) -> LineFlags {
        LineFlags::empty()
    }
}
