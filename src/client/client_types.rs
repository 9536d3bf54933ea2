use crate::ClientConfig;
use crate::resolver::Navigator;
use crate::storage::LocalStorage;
use crate::webc::WebClient;
use std::sync::Arc;

/// The dashboard API client.
///
/// Cheap to clone; all clones share the same config, storage and navigator.
#[derive(Clone)]
pub struct Client {
	pub(super) inner: Arc<ClientInner>,
}

pub(super) struct ClientInner {
	pub(super) web_client: WebClient,
	pub(super) config: ClientConfig,
	pub(super) storage: Arc<dyn LocalStorage>,
	pub(super) navigator: Arc<dyn Navigator>,
}

/// Getters
impl Client {
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	pub fn storage(&self) -> &Arc<dyn LocalStorage> {
		&self.inner.storage
	}

	pub(crate) fn web_client(&self) -> &WebClient {
		&self.inner.web_client
	}

	pub(crate) fn navigator(&self) -> &Arc<dyn Navigator> {
		&self.inner.navigator
	}
}

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Client").field("config", &self.inner.config).finish_non_exhaustive()
	}
}
