//! List command implementation

use crate::backends;

/// Print the compiled-in backends with their option help
pub fn run_list() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", backends::backend_help());

    for b in backends::available_backends() {
        if !b.aliases.is_empty() {
            println!("  (aliases for {}: {})", b.name, b.aliases.join(", "));
        }
    }

    Ok(())
}
