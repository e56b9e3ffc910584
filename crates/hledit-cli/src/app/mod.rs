//! Application-level utilities for the hledit CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the store directory
//! - A context that loads configuration lazily and opens the session

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
