//! rgpio-core - Core library for GPIO pin level reading
//!
//! This crate provides the pin-read dispatch model used by all rgpio
//! backends. It is designed to be `no_std` compatible for use in embedded
//! environments.
//!
//! # Architecture
//!
//! - [`line::LineReader`] is the hardware seam: one object per pin,
//!   wrapping the platform's zero-argument read primitive for that pin.
//! - [`bank::Bank`] is the dispatcher: it maps an integer pin index to
//!   the corresponding line reader, returning a tagged error for
//!   out-of-range indices.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable heap allocation (required for [`bank::Bank`])
//!
//! # Example
//!
//! ```ignore
//! use rgpio_core::bank::Bank;
//!
//! fn dump(bank: &mut Bank) {
//!     for pin in 0..bank.len() as u32 {
//!         match bank.read(pin) {
//!             Ok(level) => println!("pin {}: {}", pin, level),
//!             Err(e) => println!("pin {}: {}", pin, e),
//!         }
//!     }
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
pub mod bank;
pub mod error;
pub mod line;

pub use error::{Error, Result};
pub use line::{Level, LineFlags, LineReader};

#[cfg(feature = "alloc")]
pub use bank::Bank;
