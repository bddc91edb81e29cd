//! Inbound request and outbound response shapes exchanged with the serverless runtime.

// self
use crate::{_prelude::*, router::RouterError};

/// `Content-Type` of successful responses.
pub const APPLICATION_JSON: &str = "application/json";
/// `Content-Type` of error responses.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Inbound request after the runtime decoded its event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
	/// Exact request path.
	pub path: String,
	/// HTTP method.
	pub method: Method,
	/// Decoded query parameters; absent and empty maps are equivalent.
	pub query: HashMap<String, String>,
}
impl Request {
	/// Creates a request without query parameters.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { path: path.into(), method, query: HashMap::new() }
	}

	/// Shorthand for a `GET` request.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	/// Adds a query parameter, replacing any previous value for `name`.
	pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(name.into(), value.into());

		self
	}

	/// Returns the value of the query parameter `name`.
	pub fn query_param(&self, name: &str) -> Option<&str> {
		self.query.get(name).map(String::as_str)
	}

	/// Builds a request from raw event fields.
	///
	/// A method string that is not a valid HTTP token can never match a route and is reported
	/// as [`RouterError::MethodNotAllowed`].
	pub fn from_event(
		method: &str,
		path: impl Into<String>,
		query: Option<HashMap<String, String>>,
	) -> Result<Self, RouterError> {
		let path = path.into();
		let method = Method::from_bytes(method.as_bytes())
			.map_err(|_| RouterError::MethodNotAllowed { path: path.clone(), method: method.to_owned() })?;

		Ok(Self { path, method, query: query.unwrap_or_default() })
	}
}

/// Response handed back to the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
	/// HTTP status.
	pub status: StatusCode,
	/// Value of the `Content-Type` header.
	pub content_type: &'static str,
	/// Response body.
	pub body: String,
}
impl Response {
	/// Successful JSON response.
	pub fn json(body: impl Into<String>) -> Self {
		Self { status: StatusCode::OK, content_type: APPLICATION_JSON, body: body.into() }
	}

	/// Plain-text response with an explicit status.
	pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
		Self { status, content_type: TEXT_PLAIN, body: body.into() }
	}

	/// Response headers.
	pub fn headers(&self) -> BTreeMap<String, String> {
		BTreeMap::from([("Content-Type".to_owned(), self.content_type.to_owned())])
	}
}
