use crate::services::Resource;
use crate::{ApiResponse, Client, Result};
use serde_json::Value;
use std::fmt::Display;

/// Partner organizations (`/partners`).
#[derive(Debug, Clone, Copy)]
pub struct PartnerService<'a> {
	resource: Resource<'a>,
}

impl<'a> PartnerService<'a> {
	pub const BASE_PATH: &'static str = "/partners";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

impl PartnerService<'_> {
	/// List partners (filter, pagination, ...).
	pub async fn get_partners(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}

	pub async fn get_partner(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.get(id).await
	}

	pub async fn create_partner(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.create(payload).await
	}

	pub async fn update_partner(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.resource.update(id, payload).await
	}

	pub async fn delete_partner(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.delete(id).await
	}
}
