use crate::ApiError;
use crate::{storage, webc};
use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	// -- Api
	/// The server answered with a failing status (other than 401).
	#[from]
	Api(ApiError),
	/// The JSON body did not match the requested type.
	ResponseDecode {
		cause: serde_json::Error,
	},

	// -- Config
	ConfigMissingEnv {
		env_name: &'static str,
	},
	ConfigInvalidBaseUrl {
		base_url: String,
	},
	ClientMissingEndpoint,

	// -- Modules
	#[from]
	Storage(storage::Error),
	#[from]
	Webc(webc::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

/// Accessors
impl Error {
	/// Returns the normalized API error if this error came from a failing HTTP status.
	pub fn as_api_error(&self) -> Option<&ApiError> {
		match self {
			Self::Api(api_error) => Some(api_error),
			_ => None,
		}
	}

	/// Consumes the error and returns the normalized API error, if any.
	pub fn into_api_error(self) -> Option<ApiError> {
		match self {
			Self::Api(api_error) => Some(api_error),
			_ => None,
		}
	}

	/// True when the request never produced a response.
	pub const fn is_transport(&self) -> bool {
		matches!(self, Self::Webc(webc::Error::Transport { .. }))
	}
}
