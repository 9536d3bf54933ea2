use crate::services::Resource;
use crate::{ApiResponse, Client, Result};
use serde_json::Value;

/// Read-only audit trail (`/audits`).
#[derive(Debug, Clone, Copy)]
pub struct AuditService<'a> {
	resource: Resource<'a>,
}

impl<'a> AuditService<'a> {
	pub const BASE_PATH: &'static str = "/audits";

	pub(crate) const fn new(client: &'a Client) -> Self {
		Self {
			resource: Resource::new(client, Self::BASE_PATH),
		}
	}
}

impl AuditService<'_> {
	/// List audit entries (search, pagination, ...).
	pub async fn get_audits(&self, params: Option<Value>) -> Result<ApiResponse> {
		self.resource.list(params).await
	}
}
