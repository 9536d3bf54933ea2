use crate::storage::{LocalStorage, Result};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory `LocalStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.items().len()
	}

	pub fn is_empty(&self) -> bool {
		self.items().is_empty()
	}

	// A poisoned lock still holds a consistent map (every write is a single insert/remove).
	fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
		self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

impl LocalStorage for MemoryStorage {
	fn get_item(&self, key: &str) -> Option<String> {
		self.items().get(key).cloned()
	}

	fn set_item(&self, key: &str, value: &str) -> Result<()> {
		self.items().insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove_item(&self, key: &str) -> Result<()> {
		self.items().remove(key);
		Ok(())
	}
}
