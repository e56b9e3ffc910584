//! # hledit core
//!
//! Core library for hledit - keeps a plaintext ledger and a structured view
//! of it in sync while account names are edited.
//!
//! This crate has no terminal or CLI concerns.
//!
//! ## Architecture
//!
//! - **parser**: raw text to transactions
//! - **sync**: one-line account rewrite followed by a full reparse
//! - **document**: owned text/model pair
//! - **options**: account option lists
//! - **storage**: key-value persistence
//! - **session**: a document, its options and preferences, bound to a store

pub mod document;
pub mod error;
pub mod fs;
pub mod model;
pub mod options;
pub mod parser;
pub mod session;
pub mod storage;
pub mod sync;

pub use document::Document;
pub use error::{Error, Result};
pub use model::{Posting, Transaction};
pub use parser::parse;
pub use session::Session;
pub use storage::{DirStore, KeyValueStore, MemoryStore, StoreKey};
pub use sync::{apply_account_edit, RewriteOptions};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
