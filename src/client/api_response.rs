use crate::webc::WebResponse;
use crate::{Error, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The outcome of a request that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
	/// JSON (or text) body, returned unchanged. An empty body is `Value::Null`.
	Json(Value),

	/// Non-text body, such as a QR code or a certificate archive download.
	Binary { content_type: Option<String>, bytes: Bytes },

	/// The server answered 401. The stored token was removed and the navigator was sent to `/`.
	SessionExpired,
}

/// Constructors
impl ApiResponse {
	pub(crate) fn from_web_response(web_response: WebResponse) -> Self {
		if web_response.body.is_empty()
			|| web_response.content_type.is_none()
			|| web_response.is_json()
			|| web_response.is_text()
		{
			Self::Json(web_response.body_as_value())
		} else {
			Self::Binary {
				content_type: web_response.content_type,
				bytes: web_response.body,
			}
		}
	}
}

/// Getters
impl ApiResponse {
	pub fn is_session_expired(&self) -> bool {
		matches!(self, Self::SessionExpired)
	}

	pub fn json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			_ => None,
		}
	}

	pub fn into_json(self) -> Option<Value> {
		match self {
			Self::Json(value) => Some(value),
			_ => None,
		}
	}

	pub fn bytes(&self) -> Option<&Bytes> {
		match self {
			Self::Binary { bytes, .. } => Some(bytes),
			_ => None,
		}
	}

	/// Deserializes the JSON body into `T`.
	///
	/// Returns `Ok(None)` for a binary body or an expired session.
	pub fn into_json_as<T: DeserializeOwned>(self) -> Result<Option<T>> {
		match self {
			Self::Json(value) => {
				let value = serde_json::from_value(value).map_err(|cause| Error::ResponseDecode { cause })?;
				Ok(Some(value))
			}
			_ => Ok(None),
		}
	}
}
