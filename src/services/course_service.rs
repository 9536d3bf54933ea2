use crate::services::Resource;
use crate::{ApiResponse, Client, Result};
use serde_json::Value;
use std::fmt::Display;

/// Course catalog (`/courses`).
#[derive(Debug, Clone, Copy)]
pub struct CourseService<'a> {
	resource: Resource<'a>,
}

impl<'a> CourseService<'a> {
	pub const BASE_PATH: &'static str = "/courses";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

impl CourseService<'_> {
	/// List courses (filter, pagination, ...).
	pub async fn get_courses(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}

	pub async fn get_course(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.get(id).await
	}

	pub async fn create_course(&self, payload: Value) -> Result<ApiResponse> {
		self.resource.create(payload).await
	}

	/// Full or partial update.
	pub async fn update_course(&self, id: impl Display, payload: Value) -> Result<ApiResponse> {
		self.resource.update(id, payload).await
	}

	pub async fn delete_course(&self, id: impl Display) -> Result<ApiResponse> {
		self.resource.delete(id).await
	}
}
