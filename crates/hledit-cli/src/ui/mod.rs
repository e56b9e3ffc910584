//! UI primitives for the hledit CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection (TTY, color, interactivity)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Styling for highlighted and fixed accounts
//! - **Render**: Tables, key-value lines, hints
//! - **Format**: String utilities (truncate, pad)
//! - **Prompt**: Interactive account picker

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;

// Re-export commonly used render functions
pub use render::{hint, kv, print, simple_table, Column};
