//! rgpio-dummy - In-memory GPIO simulation for testing
//!
//! This crate provides a dummy backend that simulates a bank of GPIO
//! lines in memory. It's useful for testing and development without real
//! hardware: tests drive the simulated levels through [`DummyBank`] while
//! the code under test reads them through a core [`Bank`].
//!
//! Each line counts its reads, so tests can assert that a dispatch
//! touched exactly the expected hardware primitive.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

use rgpio_core::bank::Bank;
use rgpio_core::error::Result;
use rgpio_core::line::{Level, LineFlags, LineReader};

/// Configuration for the dummy bank
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Number of simulated pins
    pub pins: usize,
    /// Initial level of every pin
    pub initial: Level,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            pins: 2,
            initial: Level::Low,
        }
    }
}

/// Shared state of one simulated line
#[derive(Debug)]
struct LineState {
    level: AtomicU8,
    reads: AtomicUsize,
}

impl LineState {
    fn new(initial: Level) -> Self {
        Self {
            level: AtomicU8::new(initial.is_high() as u8),
            reads: AtomicUsize::new(0),
        }
    }
}

/// A handle to one simulated line, implementing the core read seam
#[derive(Debug, Clone)]
pub struct DummyLine {
    state: Arc<LineState>,
}

impl LineReader for DummyLine {
    fn read(&mut self) -> Result<Level> {
        self.state.reads.fetch_add(1, Ordering::Relaxed);
        Ok(Level::from(self.state.level.load(Ordering::Relaxed) != 0))
    }

    fn flags(&self) -> LineFlags {
        LineFlags::empty()
    }
}

/// Simulated GPIO bank
///
/// Owns the shared line states. [`DummyBank::to_bank`] produces a core
/// [`Bank`] whose readers observe levels set via [`DummyBank::set_level`].
pub struct DummyBank {
    lines: Vec<Arc<LineState>>,
}

impl DummyBank {
    /// Create a simulated bank with the given configuration
    pub fn new(config: &DummyConfig) -> Self {
        log::debug!(
            "dummy: creating {} simulated pins (initial {})",
            config.pins,
            config.initial
        );
        let lines = (0..config.pins)
            .map(|_| Arc::new(LineState::new(config.initial)))
            .collect();
        Self { lines }
    }

    /// Create a simulated bank with default configuration (2 pins, low)
    pub fn new_default() -> Self {
        Self::new(&DummyConfig::default())
    }

    /// Number of simulated pins
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the bank has no pins
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Set the simulated level of a pin
    ///
    /// Out-of-range pins are ignored with a warning; the simulation has
    /// no notion of writing to a pin that doesn't exist.
    pub fn set_level(&self, pin: usize, level: Level) {
        match self.lines.get(pin) {
            Some(state) => state.level.store(level.is_high() as u8, Ordering::Relaxed),
            None => log::warn!("dummy: set_level on nonexistent pin {}", pin),
        }
    }

    /// Current simulated level of a pin
    pub fn level(&self, pin: usize) -> Option<Level> {
        self.lines
            .get(pin)
            .map(|state| Level::from(state.level.load(Ordering::Relaxed) != 0))
    }

    /// How many times a pin has been read through any handle
    pub fn read_count(&self, pin: usize) -> Option<usize> {
        self.lines
            .get(pin)
            .map(|state| state.reads.load(Ordering::Relaxed))
    }

    /// Build a core [`Bank`] of handles onto the simulated lines
    pub fn to_bank(&self) -> Bank {
        let lines = self
            .lines
            .iter()
            .map(|state| {
                Box::new(DummyLine {
                    state: state.clone(),
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
/// - `pins=N` - number of simulated pins (default 2)
/// - `high` - start with all pins high (default low)
pub fn parse_options(options: &[(&str, &str)]) -> std::result::Result<DummyConfig, String> {
    let mut config = DummyConfig::default();

    for (key, value) in options {
        match *key {
            "pins" => {
                config.pins = value
                    .parse()
                    .map_err(|_| format!("Invalid pins value: {}", value))?;
            }
            "high" => {
                config.initial = Level::High;
            }
            _ => {
                log::warn!("dummy: Unknown option: {}={}", key, value);
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_reads_simulated_levels() {
        let sim = DummyBank::new(&DummyConfig {
            pins: 2,
            initial: Level::Low,
        });
        let mut bank = sim.to_bank();

        sim.set_level(0, Level::High);
        assert_eq!(bank.read(0), Ok(Level::High));
        assert_eq!(bank.read(1), Ok(Level::Low));
    }

    #[test]
    fn level_changes_are_visible_to_existing_handles() {
        let sim = DummyBank::new_default();
        let mut bank = sim.to_bank();

        assert_eq!(bank.read(0), Ok(Level::Low));
        sim.set_level(0, Level::High);
        assert_eq!(bank.read(0), Ok(Level::High));
    }

    #[test]
    fn read_counts_track_dispatch() {
        let sim = DummyBank::new_default();
        let mut bank = sim.to_bank();

        bank.read(1).unwrap();
        assert_eq!(sim.read_count(0), Some(0));
        assert_eq!(sim.read_count(1), Some(1));
    }

    #[test]
    fn raw_reads_match_simulated_levels() {
        let sim = DummyBank::new(&DummyConfig {
            pins: 2,
            initial: Level::Low,
        });
        let mut bank = sim.to_bank();
        sim.set_level(1, Level::High);

        assert_eq!(bank.read_raw(0), 0);
        assert_eq!(bank.read_raw(1), 1);
        assert_eq!(bank.read_raw(2), rgpio_core::bank::INVALID_PIN);
    }

    #[test]
    fn set_level_out_of_range_is_ignored() {
        let sim = DummyBank::new_default();
        sim.set_level(10, Level::High);
        assert_eq!(sim.level(10), None);
    }

    #[test]
    fn parse_options_defaults() {
        let config = parse_options(&[]).unwrap();
        assert_eq!(config.pins, 2);
        assert_eq!(config.initial, Level::Low);
    }

    #[test]
    fn parse_options_pins_and_high() {
        let config = parse_options(&[("pins", "8"), ("high", "")]).unwrap();
        assert_eq!(config.pins, 8);
        assert_eq!(config.initial, Level::High);
    }

    #[test]
    fn parse_options_rejects_bad_pins() {
        assert!(parse_options(&[("pins", "many")]).is_err());
    }
}
