//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod mock_server;

pub use mock_server::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Tracing

/// Installs a test subscriber once. Use `RUST_LOG=certadmin=debug` to see requests.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Tracing

// region:    --- Common Clients

use certadmin::Client;
use certadmin::resolver::{Endpoint, Navigator};
use certadmin::storage::{LocalStorage, MemoryStorage};
use std::sync::{Arc, Mutex};

/// Paths the client navigated to (session expiry redirects).
#[derive(Clone, Default)]
pub struct Navigations(Arc<Mutex<Vec<String>>>);

impl Navigations {
	pub fn paths(&self) -> Vec<String> {
		self.0.lock().unwrap().clone()
	}

	pub fn navigator(&self) -> Arc<dyn Navigator> {
		let paths = self.0.clone();
		Arc::new(move |path: &str| paths.lock().unwrap().push(path.to_string()))
	}
}

pub struct TestClient {
	pub client: Client,
	pub storage: Arc<MemoryStorage>,
	pub navigations: Navigations,
}

pub fn client_for(server: &MockServer) -> TestClient {
	client_with_storage(server, Arc::new(MemoryStorage::new()))
}

pub fn client_with_storage(server: &MockServer, storage: Arc<MemoryStorage>) -> TestClient {
	let navigations = Navigations::default();
	let client = Client::builder()
		.with_endpoint(Endpoint::from_owned(server.base_url.clone()))
		.with_storage(storage.clone())
		.with_navigator(navigations.navigator())
		.build()
		.unwrap();

	TestClient {
		client,
		storage,
		navigations,
	}
}

// endregion: --- Common Clients
