use crate::services::Resource;
use crate::{ApiResponse, Client, Result};
use serde_json::Value;
use std::fmt::Display;

/// Dashboard accounts (`/users`).
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
	resource: Resource<'a>,
}

impl<'a> UserService<'a> {
	pub const BASE_PATH: &'static str = "/users";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

impl UserService<'_> {
	/// List users (filter, pagination, ...).
	pub async fn get_users(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}

	pub async fn get_user(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.get(id).await
	}

	pub async fn create_user(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.create(payload).await
	}

	/// Full or partial update.
	pub async fn update_user(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.resource.update(id, payload).await
	}

	pub async fn delete_user(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.delete(id).await
	}
}
