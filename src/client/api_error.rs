use derive_more::Display;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use value_ext::JsonValueExt;

/// Message used when a 500 response carries no payload.
pub const SERVER_ERROR_MESSAGE: &str =
	"Server error. Please try again. If the problem persists, contact your system administrator";

/// Message used for any status without a dedicated mapping.
pub const UNKNOWN_ERROR_MESSAGE: &str =
	"Something went wrong. Please try again. If the problem persists, contact your system administrator";

// region:    --- ApiErrorKind

/// The class of a failing response.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiErrorKind {
	/// 400, 403, 404, 422, 429. The server payload is kept verbatim.
	Client,
	/// 500. The payload is `{"message": <server payload or fallback>}`.
	Server,
	/// Any other failing status. The payload is `{"message": <generic fallback>}`.
	Unknown,
}

impl ApiErrorKind {
	pub const fn default_message(&self) -> &'static str {
		match self {
			Self::Server => SERVER_ERROR_MESSAGE,
			Self::Client | Self::Unknown => UNKNOWN_ERROR_MESSAGE,
		}
	}
}

// endregion: --- ApiErrorKind

// region:    --- StatusClass

/// How the request helper reacts to a failing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
	Error(ApiErrorKind),
	/// 401. Handled locally (token cleared, redirect), never surfaced as an error.
	SessionExpired,
}

impl StatusClass {
	pub(crate) fn from_status(status: StatusCode) -> Self {
		match status.as_u16() {
			400 | 403 | 404 | 422 | 429 => Self::Error(ApiErrorKind::Client),
			401 => Self::SessionExpired,
			500 => Self::Error(ApiErrorKind::Server),
			_ => Self::Error(ApiErrorKind::Unknown),
		}
	}
}

// endregion: --- StatusClass

// region:    --- ApiError

/// The normalized error surfaced to callers for every failing status except 401.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
	kind: ApiErrorKind,
	status: u16,
	payload: Value,
}

/// Constructors
impl ApiError {
	/// Normalizes a failing response payload according to its kind.
	pub fn new(kind: ApiErrorKind, status: StatusCode, server_payload: Value) -> Self {
		let payload = match kind {
			ApiErrorKind::Client => server_payload,
			ApiErrorKind::Server => {
				let message = if is_empty_payload(&server_payload) {
					Value::String(SERVER_ERROR_MESSAGE.to_string())
				} else {
					server_payload
				};
				json!({ "message": message })
			}
			ApiErrorKind::Unknown => json!({ "message": UNKNOWN_ERROR_MESSAGE }),
		};

		Self {
			kind,
			status: status.as_u16(),
			payload,
		}
	}
}

/// Getters
impl ApiError {
	pub fn kind(&self) -> ApiErrorKind {
		self.kind
	}

	pub fn status(&self) -> u16 {
		self.status
	}

	/// The normalized payload (verbatim server payload for client errors).
	pub fn payload(&self) -> &Value {
		&self.payload
	}

	pub fn into_payload(self) -> Value {
		self.payload
	}

	/// A message fit for display.
	///
	/// Looks at a string payload, then `message`, then `message.message`,
	/// and falls back to the kind's fixed message.
	pub fn message(&self) -> &str {
		if let Value::String(message) = &self.payload {
			return message;
		}
		if let Ok(message) = self.payload.x_get_str("message") {
			return message;
		}
		if let Ok(message) = self.payload.x_get_str("/message/message") {
			return message;
		}
		self.kind.default_message()
	}

	/// Field-level details (`errors`), as sent by validation failures (422).
	pub fn errors(&self) -> Option<&Value> {
		self.payload.get("errors").filter(|v| !v.is_null())
	}

	/// Messages for one field of a validation failure.
	pub fn field_errors(&self, field: &str) -> Vec<&str> {
		self.errors()
			.and_then(|errors| errors.get(field))
			.map(|messages| match messages {
				Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
				Value::String(message) => vec![message.as_str()],
				_ => Vec::new(),
			})
			.unwrap_or_default()
	}
}

impl std::fmt::Display for ApiError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({}): {}", self.kind, self.status, self.message())
	}
}

impl std::error::Error for ApiError {}

// endregion: --- ApiError

fn is_empty_payload(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.is_empty(),
		_ => false,
	}
}

// region:    --- Tests


// endregion: --- Tests
