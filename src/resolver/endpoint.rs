use std::sync::Arc;

/// A construct to store the API base URL of the dashboard backend.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Returns true if the base URL uses `http://` or `https://` and has a host after the scheme.
	#[must_use]
	pub fn is_valid(&self) -> bool {
		let url = self.base_url().trim();
		let rest = url.strip_prefix("http://").or_else(|| url.strip_prefix("https://"));
		rest.is_some_and(|rest| !rest.trim_start_matches('/').is_empty())
	}

	/// Joins a request path to the base URL with exactly one `/` between them.
	///
	/// An empty path returns the base URL unchanged.
	#[must_use]
	pub fn join(&self, path: &str) -> String {
		let base = self.base_url().trim_end_matches('/');
		let path = path.trim_start_matches('/');
		if path.is_empty() {
			return self.base_url().to_string();
		}
		format!("{base}/{path}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_join_slashes_ok() {
		let with_slash = Endpoint::from_static("https://api.example.com/v1/");
		let without_slash = Endpoint::from_static("https://api.example.com/v1");

		assert_eq!(with_slash.join("/certificates"), "https://api.example.com/v1/certificates");
		assert_eq!(without_slash.join("/certificates"), "https://api.example.com/v1/certificates");
		assert_eq!(without_slash.join("qrs/scan/AB12"), "https://api.example.com/v1/qrs/scan/AB12");
	}

	#[test]
	fn test_join_empty_path_ok() {
		let endpoint = Endpoint::from_static("http://localhost:8000");
		assert_eq!(endpoint.join(""), "http://localhost:8000");
	}

	#[test]
	fn test_is_valid() {
		assert!(Endpoint::from_static("http://localhost:8000").is_valid());
		assert!(Endpoint::from_owned("https://api.example.com".to_string()).is_valid());
		assert!(!Endpoint::from_static("").is_valid());
		assert!(!Endpoint::from_static("ftp://files.example.com").is_valid());
		assert!(!Endpoint::from_static("http://").is_valid());
		assert!(!Endpoint::from_static("https:///").is_valid());
	}
}
