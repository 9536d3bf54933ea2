use crate::services::{Resource, encode_segment};
use crate::{ApiResponse, Client, Result};
use reqwest::Method;
use serde_json::Value;
use std::fmt::Display;

/// QR certificates (`/qrs`).
#[derive(Debug, Clone, Copy)]
pub struct QrService<'a> {
	resource: Resource<'a>,
}

impl<'a> QrService<'a> {
	pub const BASE_PATH: &'static str = "/qrs";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

// region:    --- CRUD

impl QrService<'_> {
	/// List QR certificates (search, pagination, ...).
	pub async fn get_qrs(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}

	pub async fn get_qr(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.get(id).await
	}

	pub async fn create_qr(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.create(payload).await
	}

	pub async fn update_qr(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.resource.update(id, payload).await
	}

	pub async fn delete_qr(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.delete(id).await
	}
}

// endregion: --- CRUD

// region:    --- Actions

impl QrService<'_> {
	/// POST `/qrs/download/{id}`
	pub async fn qr_download(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.call(Method::POST, format!("download/{}", encode_segment(id)), None).await
	}

	/// GET `/qrs/scan/{code}`
	pub async fn scan_qr(&self, code: impl Display) -> Result<ApiResponse> {
		self.resource.call(Method::GET, format!("scan/{}", encode_segment(code)), None).await
	}

	/// POST `/qrs/bulk-download`
	pub async fn bulk_download(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.call(Method::POST, "bulk-download", Some(payload)).await
	}
}

// endregion: --- Actions
