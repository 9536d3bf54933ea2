use crate::services::Resource;
use crate::{ApiResponse, Client, Result};
use serde_json::Value;
use std::fmt::Display;

/// Student records (`/students`).
#[derive(Debug, Clone, Copy)]
pub struct StudentService<'a> {
	resource: Resource<'a>,
}

impl<'a> StudentService<'a> {
	pub const BASE_PATH: &'static str = "/students";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

impl StudentService<'_> {
	/// List students (search, pagination, ...).
	pub async fn get_students(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}

	pub async fn get_student(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.get(id).await
	}

	pub async fn create_student(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.create(payload).await
	}

	pub async fn update_student(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.resource.update(id, payload).await
	}

	pub async fn delete_student(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.delete(id).await
	}
}
