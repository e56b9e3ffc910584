//! Key-value persistence for ledger text and preferences.
//!
//! - **traits**: the `KeyValueStore` interface
//! - **types**: the fixed keys values are stored under
//! - **dir**: one-file-per-key store in a directory
//! - **memory**: in-memory store for tests and embedding

mod dir;
mod memory;
mod traits;
mod types;

pub use dir::DirStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use types::StoreKey;
