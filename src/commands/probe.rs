//! Probe command implementation

use rgpio_core::bank::Bank;

/// Open a backend and report the resulting pin bank
pub fn run_probe(bank: &Bank) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pin bank:");
    println!("  Pins: {}", bank.len());

    for pin in 0..bank.len() as u32 {
        let flags = bank.flags(pin)?;
        if flags.is_empty() {
            println!("  pin {:3}", pin);
        } else {
            println!("  pin {:3}  [{:?}]", pin, flags);
        }
    }

    Ok(())
}
