use crate::webc::{Error, Result, to_query_pairs};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;

/// Simple reqwest client wrapper.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		WebClient { reqwest_client }
	}
}

impl WebClient {
	/// Sends one request and returns the raw response, whatever its status.
	///
	/// - `GET` sends `params` as query parameters.
	/// - Every other method sends `params` as a JSON body.
	/// - `None` sends neither.
	pub async fn do_request(
		&self,
		method: Method,
		url: &str,
		headers: &[(String, String)],
		params: Option<Value>,
	) -> Result<WebResponse> {
		let reqwest_builder = self.new_req_builder(method, url, headers, params)?;

		let reqwest_res = reqwest_builder.send().await.map_err(|cause| Error::Transport {
			url: url.to_string(),
			cause,
		})?;

		WebResponse::from_reqwest_response(url, reqwest_res).await
	}

	pub fn new_req_builder(
		&self,
		method: Method,
		url: &str,
		headers: &[(String, String)],
		params: Option<Value>,
	) -> Result<RequestBuilder> {
		let is_get = method == Method::GET;
		let mut reqwest_builder = self.reqwest_client.request(method, url);
		for (k, v) in headers.iter() {
			reqwest_builder = reqwest_builder.header(k, v);
		}

		if let Some(params) = params {
			if is_get {
				let pairs = to_query_pairs(&params)?;
				if !pairs.is_empty() {
					reqwest_builder = reqwest_builder.query(&pairs);
				}
			} else {
				reqwest_builder = reqwest_builder.json(&params);
			}
		}

		Ok(reqwest_builder)
	}
}

// region:    --- WebResponse

/// Raw response. Status interpretation is left to the caller.
#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	pub content_type: Option<String>,
	pub body: Bytes,
}

impl WebResponse {
	pub(crate) async fn from_reqwest_response(url: &str, res: reqwest::Response) -> Result<WebResponse> {
		let status = res.status();
		let content_type = res
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.map(ToString::to_string);

		let body = res.bytes().await.map_err(|cause| Error::ResponseBody {
			url: url.to_string(),
			cause,
		})?;

		Ok(WebResponse {
			status,
			content_type,
			body,
		})
	}

	/// True for JSON content types (`application/json`, `application/problem+json`, ...).
	pub fn is_json(&self) -> bool {
		self.media_type()
			.is_some_and(|mt| mt == "application/json" || mt.ends_with("+json"))
	}

	/// True for `text/*` content types.
	pub fn is_text(&self) -> bool {
		self.media_type().is_some_and(|mt| mt.starts_with("text/"))
	}

	/// The content type without parameters, lowercased (media types are case-insensitive).
	fn media_type(&self) -> Option<String> {
		self.content_type
			.as_deref()
			.map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
	}

	/// Decodes the body the way the dashboard reads it:
	/// - empty body gives `Value::Null`
	/// - JSON is parsed; if it does not parse, the text is returned as a `Value::String`
	/// - anything else is returned as a `Value::String` (lossy UTF-8)
	pub fn body_as_value(&self) -> Value {
		if self.body.is_empty() {
			return Value::Null;
		}
		if let Ok(value) = serde_json::from_slice::<Value>(&self.body) {
			return value;
		}
		Value::String(String::from_utf8_lossy(&self.body).into_owned())
	}
}

// endregion: --- WebResponse
