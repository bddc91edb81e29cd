//! Transport primitives for upstream catalog calls.
//!
//! [`CatalogTransport`] is the crate's only dependency on an HTTP stack. The search action
//! builds a [`CatalogRequest`], merges the caller's headers over [`standard_headers`], and hands
//! the request to whichever transport the handler was built with. No transport retries.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// Timeout applied when a request does not set one.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(10);
/// `User-Agent` sent with every catalog call.
pub const USER_AGENT: &str = "maxi80/1.0";

/// Boxed future returned by [`CatalogTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<CatalogResponse, TransportError>> + 'a + Send>>;

/// HTTP client abstraction used for catalog calls.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by every
/// request the process handles.
pub trait CatalogTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes `request`, returning the body of a `200 OK` response.
	///
	/// Any other status resolves to [`TransportError::Status`].
	fn send(&self, request: CatalogRequest) -> TransportFuture<'_>;
}

/// Outbound request handed to a [`CatalogTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRequest {
	/// Absolute target URL including the query string.
	pub url: Url,
	/// HTTP method.
	pub method: Method,
	/// Headers after merging caller values over the standard set.
	pub headers: BTreeMap<String, String>,
	/// Optional request body.
	pub body: Option<Vec<u8>>,
	/// Per-request timeout.
	pub timeout: StdDuration,
}
impl CatalogRequest {
	/// Creates a `GET` request carrying the standard headers.
	pub fn get(url: Url) -> Self {
		Self {
			url,
			method: Method::GET,
			headers: standard_headers(),
			body: None,
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Merges `headers` over the current set; caller values win on a case-insensitive match.
	pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		merge_headers(&mut self.headers, headers);

		self
	}

	/// Overrides the timeout.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Attaches a request body.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Returns the header value for `name`, matched case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}
}

/// Successful upstream response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogResponse {
	/// Status returned by the upstream.
	pub status: StatusCode,
	/// Raw body bytes, passed through unmodified.
	pub body: Vec<u8>,
}

/// Headers attached to every catalog call.
pub fn standard_headers() -> BTreeMap<String, String> {
	BTreeMap::from([
		("Accept".to_owned(), "application/json".to_owned()),
		("Content-Type".to_owned(), "application/json".to_owned()),
		("User-Agent".to_owned(), USER_AGENT.to_owned()),
		("X-Requested-With".to_owned(), "XMLHttpRequest".to_owned()),
	])
}

/// Inserts `extra` into `headers`, replacing entries whose names match case-insensitively.
pub fn merge_headers<I, K, V>(headers: &mut BTreeMap<String, String>, extra: I)
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: Into<String>,
{
	for (name, value) in extra {
		let name = name.into();

		headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
		headers.insert(name, value.into());
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestCatalogTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestCatalogTransport {
	/// Builds a client with rustls and no default timeout; each request carries its own.
	pub fn new() -> Result<Self, crate::error::ConfigError> {
		Ok(Self(ReqwestClient::builder().build()?))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestCatalogTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestCatalogTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl CatalogTransport for ReqwestCatalogTransport {
	fn send(&self, request: CatalogRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let timeout = request.timeout;
			let mut builder = client.request(request.method, request.url).timeout(timeout);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response =
				builder.send().await.map_err(|e| map_reqwest_error(e, timeout))?;
			let status = response.status();

			if status != StatusCode::OK {
				return Err(TransportError::Status { status });
			}

			let body = response.bytes().await.map_err(|e| map_reqwest_error(e, timeout))?;

			Ok(CatalogResponse { status, body: body.to_vec() })
		})
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(e: ReqwestError, timeout: StdDuration) -> TransportError {
	if e.is_timeout() {
		TransportError::Timeout { timeout }
	} else if e.is_builder() {
		TransportError::request(e)
	} else {
		TransportError::network(e)
	}
}
