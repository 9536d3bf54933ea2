mod support;

use crate::support::{MockReply, MockServer, Navigations, Result};
use certadmin::Client;
use certadmin::resolver::Endpoint;
use certadmin::storage::{FileStorage, LocalStorage, MemoryStorage, TOKEN_KEY};
use certadmin::store::{DarkModeStore, UserStore};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

fn temp_storage_path(name: &str) -> PathBuf {
	let path = std::env::temp_dir()
		.join(format!("certadmin-tests-{}", std::process::id()))
		.join(name);
	let _ = std::fs::remove_file(&path);
	path
}

#[test]
fn test_stores_survive_reload_ok() -> Result<()> {
	let path = temp_storage_path("stores.json");

	// -- First session
	let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::open(&path)?);
	let mut dark_mode = DarkModeStore::load(storage.clone());
	let mut user = UserStore::load(storage.clone());
	dark_mode.toggle_dark_mode()?;
	user.set_user(json!({"id": 1, "email": "admin@example.com"}))?;
	drop((dark_mode, user, storage));

	// -- Reload
	let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::open(&path)?);
	let mut dark_mode = DarkModeStore::load(storage.clone());
	let mut user = UserStore::load(storage.clone());
	assert!(dark_mode.dark_mode());
	assert_eq!(user.user(), Some(&json!({"id": 1, "email": "admin@example.com"})));

	// -- Back to defaults, and persisted as such
	dark_mode.toggle_dark_mode()?;
	user.reset_user()?;
	let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::open(&path)?);
	assert!(!DarkModeStore::load(storage.clone()).dark_mode());
	assert_eq!(UserStore::load(storage).user(), None);

	let _ = std::fs::remove_file(&path);
	Ok(())
}

#[test]
fn test_stores_are_independent_ok() -> Result<()> {
	let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
	let mut dark_mode = DarkModeStore::load(storage.clone());
	let mut user = UserStore::load(storage.clone());

	user.set_user(json!({"id": 2}))?;
	dark_mode.toggle_dark_mode()?;
	user.reset_user()?;

	assert!(dark_mode.dark_mode());
	assert_eq!(user.user(), None);
	Ok(())
}

#[tokio::test]
async fn test_session_expiry_clears_file_token_ok() -> Result<()> {
	let path = temp_storage_path("session.json");
	let server = MockServer::start().await?;
	server.reply_with(MockReply::json(401, json!({"message": "Unauthenticated."})));

	let navigations = Navigations::default();
	let storage: Arc<dyn LocalStorage> = Arc::new(FileStorage::open(&path)?);
	let client = Client::builder()
		.with_endpoint(Endpoint::from_owned(server.base_url.clone()))
		.with_storage(storage.clone())
		.with_navigator(navigations.navigator())
		.build()?;
	client.set_token("stale")?;

	let res = client.users().get_users(None).await?;

	assert!(res.is_session_expired());
	assert_eq!(FileStorage::open(&path)?.get_item(TOKEN_KEY), None);
	assert_eq!(navigations.paths(), vec!["/".to_string()]);

	let _ = std::fs::remove_file(&path);
	Ok(())
}
