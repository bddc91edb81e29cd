//! Path and method dispatch over the registered actions.

// self
use crate::{_prelude::*, action::Action, endpoint::Endpoint, request::Request};

/// Routing failures, mapped 1:1 to HTTP status codes.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RouterError {
	/// No endpoint owns the path.
	#[error("Path not found: {path}")]
	PathNotFound {
		/// Requested path.
		path: String,
	},
	/// The endpoint exists but no action answers the method.
	#[error("Method {method} not allowed for path: {path}")]
	MethodNotAllowed {
		/// Requested path.
		path: String,
		/// Requested method token.
		method: String,
	},
}
impl RouterError {
	/// Status the handler answers with.
	pub fn status(&self) -> StatusCode {
		match self {
			Self::PathNotFound { .. } => StatusCode::NOT_FOUND,
			Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
		}
	}
}

/// Ordered, immutable registration table.
#[derive(Clone, Default)]
pub struct Router {
	actions: Vec<Arc<dyn Action>>,
}
impl Router {
	/// Creates a router over `actions`, kept in registration order.
	pub fn new(actions: Vec<Arc<dyn Action>>) -> Self {
		Self { actions }
	}

	/// Appends an action; an earlier registration for the same pair keeps precedence.
	pub fn with_action(mut self, action: Arc<dyn Action>) -> Self {
		self.actions.push(action);

		self
	}

	/// Registered actions in order.
	pub fn actions(&self) -> &[Arc<dyn Action>] {
		&self.actions
	}

	/// Resolves the path to an endpoint, then picks the first action whose method matches.
	pub fn route(&self, request: &Request) -> Result<Arc<dyn Action>, RouterError> {
		let endpoint = Endpoint::from_path(&request.path)
			.ok_or_else(|| RouterError::PathNotFound { path: request.path.clone() })?;

		self.actions
			.iter()
			.find(|action| action.endpoint() == endpoint && action.method() == request.method)
			.cloned()
			.ok_or_else(|| RouterError::MethodNotAllowed {
				path: request.path.clone(),
				method: request.method.to_string(),
			})
	}
}
impl Debug for Router {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let routes = self
			.actions
			.iter()
			.map(|action| format!("{} {}", action.method(), action.endpoint()))
			.collect::<Vec<_>>();

		f.debug_struct("Router").field("routes", &routes).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::action::{ActionFuture, StationAction};

	struct Tagged {
		endpoint: Endpoint,
		method: Method,
		tag: &'static [u8],
	}
	impl Action for Tagged {
		fn endpoint(&self) -> Endpoint {
			self.endpoint
		}

		fn method(&self) -> Method {
			self.method.clone()
		}

		fn handle<'a>(&'a self, _request: &'a Request) -> ActionFuture<'a> {
			Box::pin(async move { Ok(self.tag.to_vec()) })
		}
	}

	fn tagged(endpoint: Endpoint, method: Method, tag: &'static [u8]) -> Arc<dyn Action> {
		Arc::new(Tagged { endpoint, method, tag })
	}

	#[test]
	fn unknown_path_is_not_found() {
		let router = Router::default().with_action(Arc::new(StationAction));
		let err = router.route(&Request::get("/unknown")).err().expect("Unknown path should fail.");

		assert_eq!(err, RouterError::PathNotFound { path: "/unknown".into() });
		assert_eq!(err.status(), StatusCode::NOT_FOUND);
		assert_eq!(err.to_string(), "Path not found: /unknown");
	}

	#[test]
	fn wrong_method_is_not_allowed() {
		let router = Router::default().with_action(Arc::new(StationAction));
		let err = router
			.route(&Request::new(Method::POST, "/station"))
			.err()
			.expect("POST should not match.");

		assert_eq!(err.to_string(), "Method POST not allowed for path: /station");
		assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
	}

	#[test]
	fn known_path_without_actions_is_not_allowed() {
		let err =
			Router::default().route(&Request::get("/search")).err().expect("Search is unregistered.");

		assert!(matches!(err, RouterError::MethodNotAllowed { .. }));
	}

	#[test]
	fn extension_methods_never_match() {
		let method = Method::from_bytes(b"PURGE").expect("Extension token should parse.");
		let router = Router::default().with_action(Arc::new(StationAction));
		let err =
			router.route(&Request::new(method, "/station")).err().expect("PURGE should not match.");

		assert!(matches!(err, RouterError::MethodNotAllowed { ref method, .. } if method == "PURGE"));
	}

	#[tokio::test]
	async fn first_registration_wins() {
		let router = Router::new(vec![
			tagged(Endpoint::Station, Method::POST, b"post"),
			tagged(Endpoint::Station, Method::GET, b"first"),
			tagged(Endpoint::Station, Method::GET, b"second"),
		]);
		let request = Request::get("/station");
		let action = router.route(&request).expect("GET /station should route.");
		let body = action.handle(&request).await.expect("Tagged action should succeed.");

		assert_eq!(body, b"first");
		assert_eq!(router.actions().len(), 3);
	}
}
