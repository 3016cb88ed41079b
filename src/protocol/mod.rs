//! The line protocol for driving a session over stdin/stdout.
//!
//! Commands arrive one per line; responses go to stdout. Cell states in
//! responses use lowercase tokens for tentative markers (`x`, `o`, `both`)
//! and uppercase for collapsed symbols (`X`, `O`).

pub mod parser;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use snapshot::{CellEntry, Snapshot};
