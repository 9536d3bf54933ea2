use crate::Result;
use crate::store::Persisted;
use crate::storage::LocalStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkModeState {
	#[serde(default)]
	pub dark_mode: bool,
}

/// Dark mode on/off, persisted under `darkModeStore`.
#[derive(Debug)]
pub struct DarkModeStore {
	inner: Persisted<DarkModeState>,
}

impl DarkModeStore {
	pub const STORAGE_KEY: &'static str = "darkModeStore";

	pub fn load(storage: Arc<dyn LocalStorage>) -> Self {
		Self {
			inner: Persisted::load(storage, Self::STORAGE_KEY),
		}
	}

	pub fn dark_mode(&self) -> bool {
		self.inner.state().dark_mode
	}

	pub fn toggle_dark_mode(&mut self) -> Result<()> {
		self.inner.update(|state| state.dark_mode = !state.dark_mode)
	}
}
