//! Local key-value storage
//!
//! A tiny string-to-string store for the session token, the user blob and
//! the scanned project list.
//! `FileStore` keeps a JSON object on disk; `MemoryStore` is used in tests.

use crate::error::ProjauthError;

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

/// Key holding the session token
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-encoded user profile
pub const USER_KEY: &str = "user";

/// Minimal key-value storage interface
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>, ProjauthError>;

    /// Insert or replace a value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ProjauthError>;

    /// Remove a value; removing an absent key is not an error
    fn remove_item(&mut self, key: &str) -> Result<(), ProjauthError>;
}
