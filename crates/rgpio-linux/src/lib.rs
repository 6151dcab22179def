//! rgpio-linux - Linux GPIO character device backend
//!
//! This crate reads GPIO line levels using the Linux character device
//! GPIO interface (gpiocdev), the modern replacement for the deprecated
//! sysfs interface.
//!
//! # Example
//!
//! ```no_run
//! use rgpio_linux::{LinuxGpioBank, LinuxGpioConfig};
//!
//! // Pin 0 maps to line offset 9, pin 1 to line offset 10
//! let config = LinuxGpioConfig::new("/dev/gpiochip0", vec![9, 10]);
//! let mut bank = LinuxGpioBank::open(&config)?.into_bank();
//!
//! let level = bank.read(0)?;
//! println!("pin 0: {}", level);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Usage with rgpio CLI
//!
//! ```bash
//! # Read pins 0 and 1 (line offsets 9 and 10 on gpiochip0)
//! rgpio read -b linux:dev=/dev/gpiochip0,pins=9;10
//!
//! # Using gpiochip number instead of device path, with pull-up bias
//! rgpio read -b linux:gpiochip=0,pins=9;10,bias=pull-up
//! ```
//!
//! # System Requirements
//!
//! - Linux kernel 4.8+ with GPIO character device support
//! - Access to `/dev/gpiochipN` devices (may require root or udev rules)

pub mod device;
pub mod error;

// Re-exports
pub use device::{parse_options, LinuxGpioBank, LinuxGpioConfig};
pub use error::{LinuxGpioError, Result};

/// Open a Linux GPIO bank and return a core `Bank`
///
/// This is a convenience function for use in the CLI backend dispatch.
///
/// # Arguments
///
/// * `options` - Slice of (key, value) pairs from backend string parsing
pub fn open_linux_gpio(
    options: &[(&str, &str)],
) -> std::result::Result<rgpio_core::bank::Bank, Box<dyn std::error::Error>> {
    let config = parse_options(options)?;
    let bank = LinuxGpioBank::open(&config)?;
    Ok(bank.into_bank())
}
