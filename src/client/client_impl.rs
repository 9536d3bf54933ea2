use crate::client::api_error::StatusClass;
use crate::services::{
	AuditService, CertificateService, CourseService, PartnerService, QrService, SignatoryService, StudentService,
	UserService,
};
use crate::storage::TOKEN_KEY;
use crate::{ApiError, ApiResponse, Client, ClientBuilder, Result};
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::Value;
use tracing::{debug, warn};

/// Path the navigator is sent to when the session expires.
const SESSION_EXPIRED_REDIRECT: &str = "/";

impl Client {
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}
}

// region:    --- Request

impl Client {
	/// Performs one HTTP call against the configured base URL.
	///
	/// - `GET` sends `params` as query parameters, every other verb as a JSON body.
	/// - The stored bearer token (if any) and `Accept: application/json` are attached.
	/// - A 2xx body is returned unchanged.
	/// - A 401 clears the token, navigates to `/` and resolves to `ApiResponse::SessionExpired`.
	/// - Any other failing status is returned as `Error::Api`.
	pub async fn request(&self, path: &str, method: Method, params: Option<Value>) -> Result<ApiResponse> {
		let url = self.config().endpoint().join(path);
		let headers = self.request_headers();

		debug!(%method, %url, "request");
		let web_res = self.web_client().do_request(method.clone(), &url, &headers, params).await?;
		let status = web_res.status;
		debug!(%method, %url, status = status.as_u16(), "response");

		if status.is_success() {
			return Ok(ApiResponse::from_web_response(web_res));
		}

		match StatusClass::from_status(status) {
			StatusClass::SessionExpired => {
				warn!(%method, %url, "session expired, revoking access");
				self.revoke_access();
				Ok(ApiResponse::SessionExpired)
			}
			StatusClass::Error(kind) => Err(ApiError::new(kind, status, web_res.body_as_value()).into()),
		}
	}

	fn request_headers(&self) -> Vec<(String, String)> {
		let mut headers = vec![(ACCEPT.to_string(), "application/json".to_string())];
		if let Some(token) = self.token() {
			headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
		}
		if let Some(app_name) = self.config().app_name() {
			headers.push((USER_AGENT.to_string(), app_name.to_string()));
		}
		headers
	}
}

// endregion: --- Request

// region:    --- Session

impl Client {
	/// The stored bearer token, if any.
	pub fn token(&self) -> Option<String> {
		self.storage().get_item(TOKEN_KEY).filter(|token| !token.is_empty())
	}

	/// Stores the bearer token used by every following request.
	pub fn set_token(&self, token: &str) -> Result<()> {
		self.storage().set_item(TOKEN_KEY, token)?;
		Ok(())
	}

	pub fn is_authenticated(&self) -> bool {
		self.token().is_some()
	}

	/// Removes the stored token and sends the navigator to `/`.
	///
	/// A storage failure is traced, the redirect still happens.
	pub fn revoke_access(&self) {
		if let Err(err) = self.storage().remove_item(TOKEN_KEY) {
			warn!(?err, "cannot remove stored token");
		}
		self.navigator().navigate_to(SESSION_EXPIRED_REDIRECT);
	}
}

// endregion: --- Session

// region:    --- Services

impl Client {
	pub fn audits(&self) -> AuditService<'_> {
		AuditService::new(self)
	}

	pub fn certificates(&self) -> CertificateService<'_> {
		CertificateService::new(self)
	}

	pub fn courses(&self) -> CourseService<'_> {
		CourseService::new(self)
	}

	pub fn partners(&self) -> PartnerService<'_> {
		PartnerService::new(self)
	}

	pub fn qrs(&self) -> QrService<'_> {
		QrService::new(self)
	}

	pub fn signatories(&self) -> SignatoryService<'_> {
		SignatoryService::new(self)
	}

	pub fn students(&self) -> StudentService<'_> {
		StudentService::new(self)
	}

	pub fn users(&self) -> UserService<'_> {
		UserService::new(self)
	}
}

// endregion: --- Services
