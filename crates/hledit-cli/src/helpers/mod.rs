//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Reading ledger and option text from files or stdin (`input`)
//! - Output format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{read_text_input, write_text_output};
pub use parsing::{parse_output_format, OutputFormat};
