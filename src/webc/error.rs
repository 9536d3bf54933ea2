use derive_more::Display;

#[derive(Debug, Display)]
#[display("{self:?}")]
pub enum Error {
	/// GET parameters must be a JSON object (or absent).
	QueryParamsNotObject { found: &'static str },

	/// No response was received (connection refused, DNS, TLS, ...).
	Transport { url: String, cause: reqwest::Error },

	/// A response was received but its body could not be read.
	ResponseBody { url: String, cause: reqwest::Error },
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
