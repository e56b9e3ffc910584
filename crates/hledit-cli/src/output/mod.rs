//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying transactions
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{transaction_json, transactions_json};
pub use text::{posting_rows, print_transaction, POSTING_COLUMNS};
