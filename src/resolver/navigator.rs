use std::sync::Arc;

/// Where the client sends the user when the session has expired (HTTP 401).
///
/// In a browser this is the router's `navigate_to`. Any `Fn(&str)` closure can be used.
pub trait Navigator: Send + Sync {
	fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
	F: Fn(&str) + Send + Sync,
{
	fn navigate_to(&self, path: &str) {
		self(path)
	}
}

/// Default navigator. Only traces the redirect.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
	fn navigate_to(&self, path: &str) {
		tracing::info!(path, "navigate_to");
	}
}

pub(crate) fn default_navigator() -> Arc<dyn Navigator> {
	Arc::new(LogNavigator)
}
