//! Request handlers bound to one endpoint and method pair.

pub mod search;
pub mod station;

pub use search::*;
pub use station::*;

// self
use crate::{_prelude::*, endpoint::Endpoint, request::Request};

/// Boxed future returned by [`Action::handle`].
pub type ActionFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>>> + 'a + Send>>;

/// Unit of request handling registered with the [`Router`](crate::router::Router).
pub trait Action
where
	Self: Send + Sync,
{
	/// Endpoint the action serves.
	fn endpoint(&self) -> Endpoint;

	/// Method the action answers.
	fn method(&self) -> Method {
		Method::GET
	}

	/// Produces the response body for `request`.
	fn handle<'a>(&'a self, request: &'a Request) -> ActionFuture<'a>;
}

/// Caller input failures, answered with `400 Bad Request`.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ActionError {
	/// A required query parameter is absent.
	#[error("Missing required parameter: {name}")]
	MissingParameter {
		/// Parameter name.
		name: String,
	},
	/// A query parameter is present but unusable.
	#[error("Invalid parameter '{name}': {reason}")]
	InvalidParameter {
		/// Parameter name.
		name: String,
		/// Why the value was rejected.
		reason: String,
	},
}
impl ActionError {
	/// Shorthand for [`ActionError::MissingParameter`].
	pub fn missing(name: impl Into<String>) -> Self {
		Self::MissingParameter { name: name.into() }
	}

	/// Shorthand for [`ActionError::InvalidParameter`].
	pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::InvalidParameter { name: name.into(), reason: reason.into() }
	}
}
