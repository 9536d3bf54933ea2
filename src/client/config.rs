use crate::resolver::Endpoint;
use crate::{Error, Result};

/// Runtime configuration of the dashboard client.
///
/// Mirrors the public runtime config of the dashboard: an application name and the
/// API base URL, both supplied by the environment at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	app_name: Option<String>,
	endpoint: Endpoint,
}

impl ClientConfig {
	pub const APP_NAME_ENV: &str = "APP_NAME";
	pub const API_BASE_URL_ENV: &str = "API_BASE_URL";
}

/// Constructors
impl ClientConfig {
	pub fn new(endpoint: Endpoint) -> Self {
		Self {
			app_name: None,
			endpoint,
		}
	}

	/// Reads `APP_NAME` (optional) and `API_BASE_URL` (required) from the process environment.
	pub fn from_env() -> Result<Self> {
		Self::from_env_lookup(|name| std::env::var(name).ok())
	}

	/// Same as `from_env`, with a custom variable lookup.
	pub fn from_env_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let base_url = lookup(Self::API_BASE_URL_ENV)
			.filter(|v| !v.trim().is_empty())
			.ok_or(Error::ConfigMissingEnv {
				env_name: Self::API_BASE_URL_ENV,
			})?;
		let app_name = lookup(Self::APP_NAME_ENV).filter(|v| !v.trim().is_empty());

		let config = Self {
			app_name,
			endpoint: Endpoint::from_owned(base_url.trim().to_string()),
		};
		config.validate()?;

		Ok(config)
	}
}

/// Chainable setters
impl ClientConfig {
	#[must_use]
	pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
		self.app_name = Some(app_name.into());
		self
	}

	#[must_use]
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.endpoint = endpoint;
		self
	}
}

/// Getters
impl ClientConfig {
	pub fn app_name(&self) -> Option<&str> {
		self.app_name.as_deref()
	}

	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}
}

impl ClientConfig {
	pub fn validate(&self) -> Result<()> {
		if !self.endpoint.is_valid() {
			return Err(Error::ConfigInvalidBaseUrl {
				base_url: self.endpoint.base_url().to_string(),
			});
		}
		Ok(())
	}
}
