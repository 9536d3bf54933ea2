use crate::Result;
use crate::store::Persisted;
use crate::storage::LocalStorage;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
	#[serde(default)]
	pub user: Option<Value>,
}

/// The logged-in user, persisted under `userStore`.
#[derive(Debug)]
pub struct UserStore {
	inner: Persisted<UserState>,
}

impl UserStore {
	pub const STORAGE_KEY: &'static str = "userStore";

	pub fn load(storage: Arc<dyn LocalStorage>) -> Self {
		Self {
			inner: Persisted::load(storage, Self::STORAGE_KEY),
		}
	}

	pub fn user(&self) -> Option<&Value> {
		self.inner.state().user.as_ref()
	}

	pub fn set_user(&mut self, user: Value) -> Result<()> {
		// JSON null is "no user"
		let user = (!user.is_null()).then_some(user);
		self.inner.update(|state| state.user = user)
	}

	pub fn reset_user(&mut self) -> Result<()> {
		self.inner.update(|state| state.user = None)
	}
}
