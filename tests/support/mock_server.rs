use super::Result;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use serde_json::{Value, json};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

// region:    --- Types

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: String,
	pub path: String,
	pub query: Option<String>,
	pub headers: HeaderMap,
	/// `None` when the request had no body.
	pub body: Option<Value>,
}

impl RecordedRequest {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}
}

#[derive(Debug, Clone)]
pub struct MockReply {
	pub status: StatusCode,
	pub content_type: Option<&'static str>,
	pub body: Vec<u8>,
}

impl MockReply {
	pub fn json(status: u16, value: Value) -> Self {
		Self {
			status: StatusCode::from_u16(status).unwrap(),
			content_type: Some("application/json"),
			body: value.to_string().into_bytes(),
		}
	}

	pub fn empty(status: u16) -> Self {
		Self {
			status: StatusCode::from_u16(status).unwrap(),
			content_type: None,
			body: Vec::new(),
		}
	}

	pub fn bytes(status: u16, content_type: &'static str, body: &[u8]) -> Self {
		Self {
			status: StatusCode::from_u16(status).unwrap(),
			content_type: Some(content_type),
			body: body.to_vec(),
		}
	}
}

// endregion: --- Types

// region:    --- MockServer

struct MockState {
	requests: Mutex<Vec<RecordedRequest>>,
	reply: Mutex<MockReply>,
}

/// In-process HTTP server recording every request and answering with a scripted reply.
pub struct MockServer {
	pub base_url: String,
	state: Arc<MockState>,
}

impl MockServer {
	/// Starts on `127.0.0.1:0`, answering `200 {"data": []}` until told otherwise.
	/// The base URL ends with `/api`, like the dashboard backend.
	pub async fn start() -> Result<Self> {
		super::init_tracing();

		let state = Arc::new(MockState {
			requests: Mutex::new(Vec::new()),
			reply: Mutex::new(MockReply::json(200, json!({"data": []}))),
		});

		let app = Router::new().fallback(handle).with_state(state.clone());
		let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
		let addr: SocketAddr = listener.local_addr()?;
		let base_url = format!("http://{}:{}/api", addr.ip(), addr.port());

		tokio::spawn(async move {
			if let Err(e) = axum::serve(listener, app).await {
				eprintln!("mock server error: {e}");
			}
		});

		Ok(Self { base_url, state })
	}

	pub fn reply_with(&self, reply: MockReply) {
		*self.state.reply.lock().unwrap() = reply;
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.requests().pop().expect("mock server received no request")
	}
}

async fn handle(
	State(state): State<Arc<MockState>>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let body = if body.is_empty() {
		None
	} else {
		Some(serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())))
	};

	state.requests.lock().unwrap().push(RecordedRequest {
		method: method.to_string(),
		path: uri.path().to_string(),
		query: uri.query().map(ToString::to_string),
		headers,
		body,
	});

	let reply = state.reply.lock().unwrap().clone();
	let mut builder = axum::http::Response::builder().status(reply.status);
	if let Some(content_type) = reply.content_type {
		builder = builder.header(CONTENT_TYPE, content_type);
	}
	builder.body(Body::from(reply.body)).unwrap()
}

// endregion: --- MockServer
