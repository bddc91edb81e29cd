//! Optional observability helpers for request handling and token reuse.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `maxi80.request` with the `endpoint` and
//!   `stage` fields, debug events for token reuse, and [`init_tracing`] to install a subscriber
//!   filtered by `LOG_LEVEL`.
//! - Enable `metrics` to increment `maxi80_request_total` (labeled by `endpoint` + `outcome`)
//!   and `maxi80_token_total` (labeled by `outcome`).

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each handled request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Action returned a body.
	Success,
	/// Routing or parameter failure (4xx).
	ClientError,
	/// Authorization, upstream, or internal failure (5xx).
	ServerError,
}
impl RequestOutcome {
	/// Classifies a response status.
	pub fn from_status(status: StatusCode) -> Self {
		if status.is_success() {
			Self::Success
		} else if status.is_client_error() {
			Self::ClientError
		} else {
			Self::ServerError
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::ClientError => "client_error",
			Self::ServerError => "server_error",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Token cache decisions taken by the authorization provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenEvent {
	/// Cached token validated and was reused.
	Reused,
	/// Cache was empty.
	Missing,
	/// Cached token failed validation.
	Expired,
	/// A new token was minted and cached.
	Regenerated,
	/// Minting a new token failed.
	Failed,
}
impl TokenEvent {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Reused => "reused",
			Self::Missing => "missing",
			Self::Expired => "expired",
			Self::Regenerated => "regenerated",
			Self::Failed => "failed",
		}
	}
}
impl Display for TokenEvent {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
