//! Crate-level error types shared by the router, actions, authorization layer, and transports.

// self
use crate::{_prelude::*, router::RouterError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error surfaced to the [`Handler`](crate::handler::Handler).
#[derive(Debug, ThisError)]
pub enum Error {
	/// Request did not match a registered route.
	#[error(transparent)]
	Router(#[from] RouterError),
	/// Caller supplied missing or invalid input.
	#[error(transparent)]
	Action(#[from] crate::action::ActionError),
	/// Authorization header could not be produced.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Upstream catalog call failed.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Secret store lookup failed.
	#[error("{0}")]
	Secret(
		#[from]
		#[source]
		crate::secrets::SecretError,
	),
	/// Response body could not be encoded.
	#[error("Response body could not be encoded.")]
	Encoding(#[from] serde_json::Error),
}
impl Error {
	/// HTTP status the handler answers with for this error.
	pub fn status(&self) -> StatusCode {
		match self {
			Self::Router(e) => e.status(),
			Self::Action(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Short classification that is safe to return to callers.
	///
	/// Never includes signing material or the text of foreign errors.
	pub fn public_summary(&self) -> &'static str {
		match self {
			Self::Router(RouterError::PathNotFound { .. }) => "route not found",
			Self::Router(RouterError::MethodNotAllowed { .. }) => "method not allowed",
			Self::Action(_) => "invalid request",
			Self::Auth(AuthError::Unavailable { .. }) => "authorization unavailable",
			Self::Auth(AuthError::Signing(_)) => "authorization token could not be generated",
			Self::Transport(TransportError::Timeout { .. }) => "upstream catalog timed out",
			Self::Transport(_) => "upstream catalog request failed",
			Self::Config(_) => "service is misconfigured",
			Self::Secret(_) => "credentials unavailable",
			Self::Encoding(_) => "response could not be encoded",
		}
	}
}

/// Failures raised while producing an authorization header.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Signing material is malformed or the token could not be encoded.
	#[error("Bearer token could not be signed.")]
	Signing(#[from] crate::auth::SigningError),
	/// Signing material could not be obtained when the process started.
	#[error("Authorization is unavailable: {reason}.")]
	Unavailable {
		/// Human-readable reason recorded during bootstrap.
		reason: String,
	},
}

/// Upstream transport failures. None of them are retried.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the upstream catalog.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Upstream did not answer within the request timeout.
	#[error("Upstream catalog did not respond within {timeout:?}.")]
	Timeout {
		/// Timeout applied to the request.
		timeout: StdDuration,
	},
	/// Upstream answered with a status other than 200.
	#[error("Upstream catalog returned HTTP {status}.")]
	Status {
		/// Status code returned by the upstream.
		status: StatusCode,
	},
	/// Request could not be assembled.
	#[error("Upstream catalog request could not be built.")]
	Request {
		/// Underlying builder failure.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a request construction failure.
	pub fn request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Request { source: Box::new(src) }
	}
}

/// Configuration and bootstrap failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Environment variables could not be deserialized.
	#[error("Environment configuration is invalid.")]
	Environment(#[from] envy::Error),
	/// `LOG_LEVEL` holds an unknown level.
	#[error("Log level `{0}` is not recognised.")]
	InvalidLogLevel(String),
	/// `SEARCH_TYPES` holds an unknown category.
	#[error("Search type `{0}` is not recognised.")]
	UnknownSearchType(String),
	/// `SEARCH_TYPES` is empty.
	#[error("At least one search type must be configured.")]
	NoSearchTypes,
	/// `UPSTREAM_TIMEOUT_SECS` is zero.
	#[error("Upstream timeout must be greater than zero.")]
	ZeroTimeout,
	/// Catalog base URL cannot be parsed.
	#[error("Catalog URL is invalid.")]
	InvalidCatalogUrl(#[from] url::ParseError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Global tracing subscriber could not be installed.
	#[error("Tracing subscriber could not be installed.")]
	TracingInit {
		/// Underlying subscriber failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}
