use crate::storage::{Error, LocalStorage, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// `LocalStorage` persisted as a single JSON object file (`{ "key": "value", ... }`).
///
/// The whole map is loaded on open and rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
	path: PathBuf,
	items: Mutex<BTreeMap<String, String>>,
}

/// Constructors
impl FileStorage {
	/// Opens (or lazily creates) the storage file at `path`.
	/// A missing file starts empty; it is only created on the first write.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
		let path = path.into();
		let items = if path.exists() {
			let content = fs::read_to_string(&path).map_err(|cause| Error::FileRead {
				path: path.clone(),
				cause,
			})?;
			if content.trim().is_empty() {
				BTreeMap::new()
			} else {
				serde_json::from_str(&content).map_err(|cause| Error::FileInvalidJson {
					path: path.clone(),
					cause,
				})?
			}
		} else {
			BTreeMap::new()
		};

		Ok(Self {
			path,
			items: Mutex::new(items),
		})
	}
}

/// Getters
impl FileStorage {
	pub fn path(&self) -> &Path {
		&self.path
	}
}

/// Privates
impl FileStorage {
	fn items(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
		self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn save(&self, items: &BTreeMap<String, String>) -> Result<()> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|cause| Error::FileWrite {
				path: self.path.clone(),
				cause,
			})?;
		}
		let content = serde_json::to_string_pretty(items)?;
		fs::write(&self.path, content).map_err(|cause| Error::FileWrite {
			path: self.path.clone(),
			cause,
		})
	}
}

impl LocalStorage for FileStorage {
	fn get_item(&self, key: &str) -> Option<String> {
		self.items().get(key).cloned()
	}

	fn set_item(&self, key: &str, value: &str) -> Result<()> {
		let mut items = self.items();
		items.insert(key.to_string(), value.to_string());
		self.save(&items)
	}

	fn remove_item(&self, key: &str) -> Result<()> {
		let mut items = self.items();
		if items.remove(key).is_some() {
			self.save(&items)?;
		}
		Ok(())
	}
}
