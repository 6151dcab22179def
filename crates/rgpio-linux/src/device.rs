//! Linux GPIO character device line reading
//!
//! This module provides the `LinuxGpioBank` struct that requests a set of
//! GPIO lines as inputs via Linux's GPIO character device interface
//! (gpiocdev) and exposes each line through the core `LineReader` seam.
//!
//! Pin indices are positional: the N-th offset in the configuration
//! becomes pin N of the resulting bank, independent of the kernel line
//! offset it maps to.

use crate::error::{LinuxGpioError, Result};

use gpiocdev::line::{Bias, Offset, Value};
use gpiocdev::request::{Config, Request};

use rgpio_core::bank::Bank;
use rgpio_core::error::{Error as CoreError, Result as CoreResult};
use rgpio_core::line::{Level, LineFlags, LineReader};

use std::sync::Arc;

/// Configuration for opening a Linux GPIO bank
#[derive(Debug, Clone, Default)]
pub struct LinuxGpioConfig {
    /// Device path (e.g., "/dev/gpiochip0")
    pub device: String,
    /// GPIO line offsets, in pin-index order
    pub pins: Vec<Offset>,
    /// Treat all lines as active low
    pub active_low: bool,
    /// Bias setting applied to all lines
    pub bias: Option<Bias>,
}

impl LinuxGpioConfig {
    /// Create a new configuration with the given device path and line offsets
    pub fn new(device: impl Into<String>, pins: impl Into<Vec<Offset>>) -> Self {
        Self {
            device: device.into(),
            pins: pins.into(),
            ..Default::default()
        }
    }

    /// Treat all lines as active low
    pub fn with_active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    /// Apply a bias setting to all lines
    pub fn with_bias(mut self, bias: Bias) -> Self {
        self.bias = Some(bias);
        self
    }
}

/// A requested GPIO line, readable through the core seam
struct LinuxLine {
    request: Arc<Request>,
    offset: Offset,
    flags: LineFlags,
}

impl LineReader for LinuxLine {
    fn read(&mut self) -> CoreResult<Level> {
        match self.request.value(self.offset) {
            Ok(Value::Active) => Ok(Level::High),
            Ok(Value::Inactive) => Ok(Level::Low),
            Err(e) => {
                log::error!("Failed to get line {}: {}", self.offset, e);
                Err(CoreError::ReadFailed)
            }
        }
    }

    fn flags(&self) -> LineFlags {
        self.flags
    }
}

/// Linux GPIO bank backed by a character device line request
pub struct LinuxGpioBank {
    request: Arc<Request>,
    pins: Vec<Offset>,
    flags: LineFlags,
}

impl LinuxGpioBank {
    /// Request the configured lines as inputs
    pub fn open(config: &LinuxGpioConfig) -> Result<Self> {
        if config.device.is_empty() {
            return Err(LinuxGpioError::NoDevice);
        }
        if config.pins.is_empty() {
            return Err(LinuxGpioError::NoPins);
        }

        log::debug!("linux_gpio: Opening device {}", config.device);

        // Settings apply to the most recently selected line
        let mut req_config = Config::default();
        for &offset in &config.pins {
            req_config.with_line(offset).as_input();
            if config.active_low {
                req_config.as_active_low();
            }
            if let Some(bias) = config.bias {
                req_config.with_bias(bias);
            }
        }

        let request = Request::from_config(req_config)
            .on_chip(&config.device)
            .with_consumer("rgpio")
            .request()
            .map_err(LinuxGpioError::LineRequestFailed)?;

        let mut flags = LineFlags::empty();
        if config.active_low {
            flags |= LineFlags::ACTIVE_LOW;
        }
        match config.bias {
            Some(Bias::PullUp) => flags |= LineFlags::BIAS_PULL_UP,
            Some(Bias::PullDown) => flags |= LineFlags::BIAS_PULL_DOWN,
            _ => {}
        }

        log::info!(
            "linux_gpio: Opened {} with {} input line(s): {:?}",
            config.device,
            config.pins.len(),
            config.pins
        );

        Ok(Self {
            request: Arc::new(request),
            pins: config.pins.clone(),
            flags,
        })
    }

    /// Number of requested lines
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Whether no lines were requested
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Build a core [`Bank`] over the requested lines
    pub fn into_bank(self) -> Bank {
        let lines = self
            .pins
            .iter()
            .map(|&offset| {
                Box::new(LinuxLine {
                    request: self.request.clone(),
                    offset,
                    flags: self.flags,
                }) as Box<dyn LineReader>
            })
            .collect();
        Bank::from_lines(lines)
    }
}

/// Parse backend options from a list of key-value pairs
///
/// # Supported Options
///
/// - `dev=/dev/gpiochipN` - GPIO chip device path (required, or use gpiochip)
/// - `gpiochip=N` - GPIO chip number (alternative to dev)
/// - `pins=9;10` - GPIO line offsets in pin-index order (required;
///   `;`-separated, since `,` separates backend options)
/// - `active-low` - treat all lines as active low
/// - `bias=pull-up|pull-down|disabled` - bias applied to all lines
pub fn parse_options(options: &[(&str, &str)]) -> std::result::Result<LinuxGpioConfig, String> {
    let mut config = LinuxGpioConfig::default();
    let mut gpiochip: Option<u32> = None;

    for (key, value) in options {
        match *key {
            "dev" => {
                config.device = value.to_string();
            }
            "gpiochip" => {
                gpiochip = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid gpiochip value: {}", value))?,
                );
            }
            "pins" => {
                for part in value.split(';') {
                    config.pins.push(
                        part.parse()
                            .map_err(|_| format!("Invalid pin offset: {}", part))?,
                    );
                }
            }
            "active-low" => {
                config.active_low = true;
            }
            "bias" => {
                config.bias = Some(match *value {
                    "pull-up" => Bias::PullUp,
                    "pull-down" => Bias::PullDown,
                    "disabled" => Bias::Disabled,
                    _ => return Err(format!("Invalid bias value: {}", value)),
                });
            }
            _ => {
                log::warn!("linux_gpio: Unknown option: {}={}", key, value);
            }
        }
    }

    // Handle dev vs gpiochip
    if config.device.is_empty() {
        if let Some(n) = gpiochip {
            if n > 9 {
                return Err("Maximum gpiochip number supported is 9".to_string());
            }
            config.device = format!("/dev/gpiochip{}", n);
        } else {
            return Err("Either 'dev' or 'gpiochip' must be specified.\n\
                 e.g. linux:dev=/dev/gpiochip0,pins=9;10"
                .to_string());
        }
    } else if gpiochip.is_some() {
        return Err("Only one of 'dev' or 'gpiochip' can be specified".to_string());
    }

    if config.pins.is_empty() {
        return Err("Missing required parameter: pins".to_string());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_options_dev_and_pins() {
        let config = parse_options(&[("dev", "/dev/gpiochip0"), ("pins", "9;10")]).unwrap();
        assert_eq!(config.device, "/dev/gpiochip0");
        assert_eq!(config.pins, vec![9, 10]);
        assert!(!config.active_low);
        assert!(config.bias.is_none());
    }

    #[test]
    fn parse_options_gpiochip_number() {
        let config = parse_options(&[("gpiochip", "3"), ("pins", "4")]).unwrap();
        assert_eq!(config.device, "/dev/gpiochip3");
        assert_eq!(config.pins, vec![4]);
    }

    #[test]
    fn parse_options_rejects_dev_and_gpiochip_together() {
        assert!(parse_options(&[
            ("dev", "/dev/gpiochip0"),
            ("gpiochip", "1"),
            ("pins", "4")
        ])
        .is_err());
    }

    #[test]
    fn parse_options_requires_pins() {
        assert!(parse_options(&[("dev", "/dev/gpiochip0")]).is_err());
    }

    #[test]
    fn parse_options_requires_device() {
        assert!(parse_options(&[("pins", "4")]).is_err());
    }

    #[test]
    fn parse_options_flags_and_bias() {
        let config = parse_options(&[
            ("dev", "/dev/gpiochip0"),
            ("pins", "4"),
            ("active-low", ""),
            ("bias", "pull-up"),
        ])
        .unwrap();
        assert!(config.active_low);
        assert_eq!(config.bias, Some(Bias::PullUp));
    }

    #[test]
    fn parse_options_rejects_comma_separated_pins() {
        // Commas separate backend options, so a comma inside the pins
        // value must be a hard error rather than a truncated pin list.
        let err = parse_options(&[("dev", "/dev/gpiochip0"), ("pins", "9,10")]).unwrap_err();
        assert!(err.contains("Invalid pin offset"));
    }

    #[test]
    fn parse_options_rejects_bad_values() {
        assert!(parse_options(&[("dev", "/dev/gpiochip0"), ("pins", "x")]).is_err());
        assert!(parse_options(&[("gpiochip", "10"), ("pins", "4")]).is_err());
        assert!(parse_options(&[("dev", "/dev/gpiochip0"), ("pins", "4"), ("bias", "strong")])
            .is_err());
    }
}
