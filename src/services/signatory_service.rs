use crate::services::Resource;
use crate::{ApiResponse, Client, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use serde_json::{Value, json};
use std::fmt::Display;

/// Certificate signatories (`/signatories`) and their signature images.
#[derive(Debug, Clone, Copy)]
pub struct SignatoryService<'a> {
	client: &'a Client,
	resource: Resource<'a>,
}

impl<'a> SignatoryService<'a> {
	pub const BASE_PATH: &'static str = "/signatories";
	pub const UPLOAD_SIGNATURE_PATH: &'static str = "/upload-signature";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			client,
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

// region:    --- CRUD

impl SignatoryService<'_> {
	/// List signatories (filter, pagination, ...).
	pub async fn get_signatories(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}

	pub async fn get_signatory(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.get(id).await
	}

	pub async fn create_signatory(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.create(payload).await
	}

	pub async fn update_signatory(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.resource.update(id, payload).await
	}

	pub async fn delete_signatory(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.delete(id).await
	}
}

// endregion: --- CRUD

// region:    --- Signature Image

impl SignatoryService<'_> {
	/// Uploads a signature image given as a data URL. The response holds the saved image URL.
	///
	/// POST `/upload-signature` with `{"name": .., "signature": <data_url>}`
	pub async fn upload_signature_image(&self, data_url: &str, name: &str) -> Result<ApiResponse> {
		let payload = json!({
			"name": name,
			"signature": data_url,
		});
		self.client
			.request(Self::UPLOAD_SIGNATURE_PATH, Method::POST, Some(payload))
			.await
	}
}

/// Builds a `data:<mime>;base64,<content>` URL, as produced by a canvas signature pad.
pub fn signature_data_url(mime_type: &str, image: &[u8]) -> String {
	format!("data:{mime_type};base64,{}", STANDARD.encode(image))
}

// endregion: --- Signature Image

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_signature_data_url_ok() {
		let url = signature_data_url("image/png", b"sig");
		assert_eq!(url, "data:image/png;base64,c2ln");
	}
}
