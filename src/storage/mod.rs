//! Key/value string storage with browser local-storage semantics.
//!
//! The bearer token (key `_token`) and the persisted UI stores live here.
//! - `MemoryStorage` is the default, it lives as long as the process.
//! - `FileStorage` keeps every entry in one JSON file so values survive restarts.

// region:    --- Modules

mod error;
mod file_storage;
mod memory_storage;

pub use error::*;
pub use file_storage::*;
pub use memory_storage::*;

// endregion: --- Modules

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "_token";

/// Browser-like local storage. Implementations must be internally synchronized.
pub trait LocalStorage: Send + Sync {
	fn get_item(&self, key: &str) -> Option<String>;

	fn set_item(&self, key: &str, value: &str) -> Result<()>;

	/// Removing a missing key is not an error.
	fn remove_item(&self, key: &str) -> Result<()>;
}
