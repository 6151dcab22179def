//! Pin read dispatcher
//!
//! A [`Bank`] owns one [`LineReader`] per pin and maps an integer pin
//! index to the corresponding reader. Out-of-range indices produce a
//! tagged [`Error::InvalidPin`] rather than an in-band sentinel; the
//! legacy sentinel contract is kept on [`Bank::read_raw`] for callers
//! that want the historical integer interface.

use crate::error::{Error, Result};
use crate::line::{Level, LineFlags, LineReader};

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Sentinel returned by [`Bank::read_raw`] for invalid pins and failed reads
pub const INVALID_PIN: i32 = -1;

/// Pin read dispatcher
///
/// Pin index N dispatches to the N-th reader. The bank holds no other
/// state: reads are synchronous and side-effect free from the caller's
/// perspective.
#[derive(Default)]
pub struct Bank {
    lines: Vec<Box<dyn LineReader>>,
}

impl Bank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a bank from an ordered list of line readers
    pub fn from_lines(lines: Vec<Box<dyn LineReader>>) -> Self {
        Self { lines }
    }

    /// Append a line reader; it serves the next free pin index
    pub fn push(&mut self, line: Box<dyn LineReader>) {
        self.lines.push(line);
    }

    /// Number of pins served by this bank
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the bank serves no pins
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read the logic level of the given pin
    ///
    /// Returns [`Error::InvalidPin`] for indices the bank does not serve;
    /// hardware read failures are propagated from the line reader.
    pub fn read(&mut self, pin: u32) -> Result<Level> {
        let count = self.lines.len();
        match self.lines.get_mut(pin as usize) {
            Some(line) => {
                let level = line.read()?;
                log::trace!("pin {}: {}", pin, level);
                Ok(level)
            }
            None => Err(Error::InvalidPin { pin, count }),
        }
    }

    /// Read a pin with the legacy integer contract
    ///
    /// Negative or out-of-range indices return exactly [`INVALID_PIN`]
    /// (−1); otherwise the raw level of the pin (0 or 1). A failed
    /// hardware read also folds to −1, which is indistinguishable from
    /// the invalid-pin case. Use [`Bank::read`] when the caller needs to
    /// tell them apart.
    pub fn read_raw(&mut self, pin: i32) -> i32 {
        let Ok(pin) = u32::try_from(pin) else {
            return INVALID_PIN;
        };
        match self.read(pin) {
            Ok(level) => level.as_raw(),
            Err(e) => {
                log::debug!("read_raw({}): {}", pin, e);
                INVALID_PIN
            }
        }
    }

    /// Attribute flags of the given pin's line
    pub fn flags(&self, pin: u32) -> Result<LineFlags> {
        let count = self.lines.len();
        self.lines
            .get(pin as usize)
            .map(|line| line.flags())
            .ok_or(Error::InvalidPin { pin, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    /// Reader returning a fixed level, counting how often it was read
    struct FixedLine {
        level: Level,
        reads: Rc<Cell<usize>>,
    }

    impl FixedLine {
        fn new(level: Level) -> (Box<dyn LineReader>, Rc<Cell<usize>>) {
            let reads = Rc::new(Cell::new(0));
            let line = Self {
                level,
                reads: reads.clone(),
            };
            (Box::new(line), reads)
        }
    }

    impl LineReader for FixedLine {
        fn read(&mut self) -> Result<Level> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.level)
        }
    }

    /// Reader whose hardware read always fails
    struct BrokenLine;

    impl LineReader for BrokenLine {
        fn read(&mut self) -> Result<Level> {
            Err(Error::ReadFailed)
        }
    }

    fn two_pin_bank() -> (Bank, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let (line0, reads0) = FixedLine::new(Level::High);
        let (line1, reads1) = FixedLine::new(Level::Low);
        (Bank::from_lines(vec![line0, line1]), reads0, reads1)
    }

    #[test]
    fn pin0_returns_its_primitive_value() {
        let (mut bank, _, _) = two_pin_bank();
        assert_eq!(bank.read(0), Ok(Level::High));
    }

    #[test]
    fn pin1_returns_its_primitive_value() {
        let (mut bank, _, _) = two_pin_bank();
        assert_eq!(bank.read(1), Ok(Level::Low));
    }

    #[test]
    fn dispatch_calls_only_the_selected_primitive() {
        let (mut bank, reads0, reads1) = two_pin_bank();
        bank.read(1).unwrap();
        assert_eq!(reads0.get(), 0);
        assert_eq!(reads1.get(), 1);
    }

    #[test]
    fn out_of_range_pin_is_invalid() {
        let (mut bank, _, _) = two_pin_bank();
        assert_eq!(bank.read(2), Err(Error::InvalidPin { pin: 2, count: 2 }));
        assert_eq!(
            bank.read(1000),
            Err(Error::InvalidPin { pin: 1000, count: 2 })
        );
    }

    #[test]
    fn invalid_pin_touches_no_primitive() {
        let (mut bank, reads0, reads1) = two_pin_bank();
        let _ = bank.read(5);
        assert_eq!(reads0.get(), 0);
        assert_eq!(reads1.get(), 0);
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let (mut bank, _, _) = two_pin_bank();
        let first = bank.read(0).unwrap();
        let second = bank.read(0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn raw_api_returns_levels_for_valid_pins() {
        let (mut bank, _, _) = two_pin_bank();
        assert_eq!(bank.read_raw(0), 1);
        assert_eq!(bank.read_raw(1), 0);
    }

    #[test]
    fn raw_api_returns_sentinel_for_invalid_pins() {
        let (mut bank, _, _) = two_pin_bank();
        assert_eq!(bank.read_raw(-1), INVALID_PIN);
        assert_eq!(bank.read_raw(2), INVALID_PIN);
        assert_eq!(bank.read_raw(1000), INVALID_PIN);
    }

    #[test]
    fn raw_api_folds_read_failure_to_sentinel() {
        let mut bank = Bank::from_lines(vec![Box::new(BrokenLine)]);
        assert_eq!(bank.read_raw(0), INVALID_PIN);
    }

    #[test]
    fn typed_api_surfaces_read_failure() {
        let mut bank = Bank::from_lines(vec![Box::new(BrokenLine)]);
        assert_eq!(bank.read(0), Err(Error::ReadFailed));
    }

    #[test]
    fn empty_bank_rejects_every_pin() {
        let mut bank = Bank::new();
        assert!(bank.is_empty());
        assert_eq!(bank.read(0), Err(Error::InvalidPin { pin: 0, count: 0 }));
        assert_eq!(bank.read_raw(0), INVALID_PIN);
    }

    #[test]
    fn flags_dispatch_matches_read_dispatch() {
        let (bank, _, _) = two_pin_bank();
        assert_eq!(bank.flags(0), Ok(LineFlags::empty()));
        assert_eq!(bank.flags(2), Err(Error::InvalidPin { pin: 2, count: 2 }));
    }
}
