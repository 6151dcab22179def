//! Read command implementation

use rgpio_core::bank::Bank;

/// Read and print the given pins, or every pin when none are given
///
/// With `raw`, prints the legacy integer contract (0/1, or -1 for an
/// invalid pin or failed read) and never errors. Without it, an invalid
/// pin or read failure is reported and returned as an error.
pub fn run_read(
    bank: &mut Bank,
    pins: &[u32],
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let all: Vec<u32>;
    let pins = if pins.is_empty() {
        all = (0..bank.len() as u32).collect();
        &all
    } else {
        pins
    };

    let mut failed = false;
    for &pin in pins {
        if raw {
            println!("pin {}: {}", pin, bank.read_raw(pin as i32));
            continue;
        }
        match bank.read(pin) {
            Ok(level) => println!("pin {}: {}", pin, level),
            Err(e) => {
                eprintln!("pin {}: {}", pin, e);
                failed = true;
            }
        }
    }

    if failed {
        return Err("one or more pins could not be read".into());
    }
    Ok(())
}
