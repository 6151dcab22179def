//! CLI command implementations
//!
//! Commands operate on the core `Bank` abstraction, so they work the
//! same regardless of which backend produced the bank.

mod list;
mod probe;
mod read;

pub use list::run_list;
pub use probe::run_probe;
pub use read::run_read;
