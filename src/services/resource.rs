use crate::{ApiResponse, Client, Result};
use reqwest::{Method, Url};
use serde_json::Value;
use std::fmt::Display;

/// Percent-encodes one path segment (`/`, `#`, `?`, spaces, ...), so an id or a scan code
/// always lands in a single segment.
pub fn encode_segment(value: impl Display) -> String {
	let value = value.to_string();
	let Ok(mut url) = Url::parse("http://segment.local/") else {
		return value;
	};
	if let Ok(mut segments) = url.path_segments_mut() {
		segments.clear().push(&value);
	}
	url.path().trim_start_matches('/').to_string()
}

/// A REST collection bound to one base path, e.g. `/courses`.
///
/// - `list`   GET    `<base>` (params as query)
/// - `get`    GET    `<base>/<id>`
/// - `create` POST   `<base>` (payload as body)
/// - `update` PUT    `<base>/<id>` (payload as body)
/// - `delete` DELETE `<base>/<id>`
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
	client: &'a Client,
	base_path: &'static str,
}

/// Constructors
impl<'a> Resource<'a> {
	pub const fn new(client: &'a Client, base_path: &'static str) -> Self {
		Self { client, base_path }
	}
}

/// Getters
impl Resource<'_> {
	pub const fn base_path(&self) -> &'static str {
		self.base_path
	}

	/// `<base>/<sub_path>`, with `sub_path` taken as is.
	pub fn path(&self, sub_path: impl Display) -> String {
		format!("{}/{sub_path}", self.base_path)
	}

	/// `<base>/<id>`, with `id` percent-encoded.
	pub fn item_path(&self, id: impl Display) -> String {
		self.path(encode_segment(id))
	}
}

/// Calls
impl Resource<'_> {
	pub async fn list(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.client.request(self.base_path, Method::GET, params).await
	}

	pub async fn get(&self, id: impl Display) -> Result<ApiResponse> {
		self.client.request(&self.item_path(id), Method::GET, None).await
	}

	pub async fn create(&self, payload: Value) -> Result<ApiResponse> {
		self.client.request(self.base_path, Method::POST, Some(payload)).await
	}

	pub async fn update(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.client.request(&self.item_path(id), Method::PUT, Some(payload)).await
	}

	pub async fn delete(&self, id: impl Display) -> Result<ApiResponse> {
		self.client.request(&self.item_path(id), Method::DELETE, None).await
	}

	/// Resource-specific endpoint under the base path (`<base>/<sub_path>`).
	/// Ids inside `sub_path` must already be encoded with `encode_segment`.
	pub async fn call(&self, method: Method, sub_path: impl Display, params: Option<Value>) -> Result<ApiResponse> {
		self.client.request(&self.path(sub_path), method, params).await
	}
}
