use crate::client::client_types::ClientInner;
use crate::resolver::{Endpoint, Navigator, default_navigator};
use crate::storage::{LocalStorage, MemoryStorage};
use crate::webc::WebClient;
use crate::{Client, ClientConfig, Error, Result};
use std::sync::Arc;

/// The builder for the `Client` structure.
///
/// ```
/// use certadmin::{Client, resolver::Endpoint};
///
/// let client = Client::builder()
/// 	.with_endpoint(Endpoint::from_static("https://api.example.com/api"))
/// 	.build()
/// 	.unwrap();
/// ```
#[derive(Default)]
pub struct ClientBuilder {
	config: Option<ClientConfig>,
	storage: Option<Arc<dyn LocalStorage>>,
	navigator: Option<Arc<dyn Navigator>>,
	reqwest_client: Option<reqwest::Client>,
}

/// Builder methods
impl ClientBuilder {
	/// Set the config (app name and API base URL).
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Set only the API base URL, keeping the rest of the config.
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		let config = match self.config.take() {
			Some(config) => config.with_endpoint(endpoint),
			None => ClientConfig::new(endpoint),
		};
		self.config = Some(config);
		self
	}

	/// Storage holding the bearer token. Defaults to a fresh `MemoryStorage`.
	pub fn with_storage(mut self, storage: Arc<dyn LocalStorage>) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Navigator used on session expiry. Defaults to one that only traces.
	pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
		self.navigator = Some(navigator);
		self
	}

	/// Use a custom reqwest client (proxy, TLS roots, ...).
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.reqwest_client = Some(reqwest_client);
		self
	}

	/// Build a new immutable `Client`.
	pub fn build(self) -> Result<Client> {
		let config = self.config.ok_or(Error::ClientMissingEndpoint)?;
		config.validate()?;

		let inner = ClientInner {
			web_client: WebClient::from_reqwest_client(self.reqwest_client.unwrap_or_default()),
			config,
			storage: self.storage.unwrap_or_else(|| Arc::new(MemoryStorage::new())),
			navigator: self.navigator.unwrap_or_else(default_navigator),
		};

		Ok(Client { inner: Arc::new(inner) })
	}
}
