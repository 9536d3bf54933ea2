use crate::services::{Resource, encode_segment};
use crate::{ApiResponse, Client, Result};
use reqwest::Method;
use serde_json::{Value, json};
use std::fmt::Display;

/// Issued certificates (`/certificates`).
#[derive(Debug, Clone, Copy)]
pub struct CertificateService<'a> {
	resource: Resource<'a>,
}

impl<'a> CertificateService<'a> {
	pub const BASE_PATH: &'static str = "/certificates";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

// region:    --- CRUD

impl CertificateService<'_> {
	/// List certificates (search, pagination, ...).
	pub async fn get_certificates(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}

	pub async fn get_certificate(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.get(id).await
	}

	pub async fn create_certificate(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.create(payload).await
	}

	pub async fn update_certificate(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.resource.update(id, payload).await
	}

	pub async fn delete_certificate(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.delete(id).await
	}
}

// endregion: --- CRUD

// region:    --- Actions

impl CertificateService<'_> {
	/// QR code of one certificate. POST `/certificates/download/qr/{id}`
	pub async fn qr_download(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.call(Method::POST, format!("download/qr/{}", encode_segment(id)), None).await
	}

	/// Public verification by certificate code. GET `/certificates/scan/{code}`
	pub async fn scan_certificate(&self, code: impl Display, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.call(Method::GET, format!("scan/{}", encode_segment(code)), params).await
	}

	/// Next free serial for a serial type. POST `/certificates/serial-check`
	pub async fn fetch_available_serial(&self, serial_type: &str) -> Result<ApiResponse> {
		let payload = json!({ "serial_type": serial_type });
		self.resource.call(Method::POST, "serial-check", Some(payload)).await
	}

	/// Archive of several certificates. POST `/certificates/download`
	pub async fn bulk_download(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.call(Method::POST, "download", Some(payload)).await
	}
}

// endregion: --- Actions
