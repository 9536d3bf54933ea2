use crate::Result;
use crate::storage::LocalStorage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

/// A state value mirrored to one `LocalStorage` key as JSON.
pub struct Persisted<S> {
	storage: Arc<dyn LocalStorage>,
	key: &'static str,
	state: S,
}

impl<S> Persisted<S>
where
	S: Serialize + DeserializeOwned + Default,
{
	/// Loads the last saved state. A missing or undecodable entry gives `S::default()`.
	pub fn load(storage: Arc<dyn LocalStorage>, key: &'static str) -> Self {
		let state = match storage.get_item(key) {
			Some(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
				warn!(key, %err, "cannot decode persisted state, using default");
				S::default()
			}),
			None => S::default(),
		};

		Self { storage, key, state }
	}

	pub fn state(&self) -> &S {
		&self.state
	}

	pub fn key(&self) -> &'static str {
		self.key
	}

	/// Applies `f` to the in-memory state, then writes it through.
	///
	/// The in-memory state is updated even if the write fails.
	pub fn update(&mut self, f: impl FnOnce(&mut S)) -> Result<()> {
		f(&mut self.state);
		self.save()
	}

	fn save(&self) -> Result<()> {
		let content = serde_json::to_string(&self.state).map_err(crate::storage::Error::from)?;
		self.storage.set_item(self.key, &content)?;
		Ok(())
	}
}

impl<S: std::fmt::Debug> std::fmt::Debug for Persisted<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Persisted")
			.field("key", &self.key)
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}
