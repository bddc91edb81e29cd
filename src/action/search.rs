//! `GET /search?term=` proxied to the catalog search.

// self
use crate::{
	_prelude::*,
	action::{Action, ActionError, ActionFuture},
	auth::AuthorizationProvider,
	catalog::{self, CATALOG_BASE_URL, CatalogEndpoint, SearchType},
	config::Config,
	endpoint::Endpoint,
	error::TransportError,
	request::Request,
	transport::{CatalogRequest, CatalogTransport, DEFAULT_TIMEOUT},
};

/// Query parameter holding the search term.
pub const TERM: &str = "term";

/// Knobs applied to every upstream search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
	/// Catalog base URL.
	pub base_url: String,
	/// Categories requested via `types`.
	pub types: Vec<SearchType>,
	/// Upstream timeout.
	pub timeout: StdDuration,
}
impl Default for SearchOptions {
	fn default() -> Self {
		Self { base_url: CATALOG_BASE_URL.into(), types: vec![SearchType::Songs], timeout: DEFAULT_TIMEOUT }
	}
}
impl From<&Config> for SearchOptions {
	fn from(config: &Config) -> Self {
		Self {
			base_url: config.catalog_base_url.clone(),
			types: config.search_types.clone(),
			timeout: config.upstream_timeout(),
		}
	}
}

/// Forwards the search term to the catalog and passes the upstream body through unmodified.
pub struct SearchAction {
	transport: Arc<dyn CatalogTransport>,
	authorization: Arc<dyn AuthorizationProvider>,
	options: SearchOptions,
}
impl SearchAction {
	/// Creates the action around a shared transport and authorization provider.
	pub fn new(
		transport: Arc<dyn CatalogTransport>,
		authorization: Arc<dyn AuthorizationProvider>,
		options: SearchOptions,
	) -> Self {
		Self { transport, authorization, options }
	}

	/// Extracts the term, rejecting absent or blank values before any upstream work.
	pub fn term(request: &Request) -> Result<&str, ActionError> {
		let term = request.query_param(TERM).ok_or_else(|| ActionError::missing(TERM))?;

		if term.trim().is_empty() {
			return Err(ActionError::invalid(TERM, "must not be blank"));
		}

		Ok(term)
	}

	async fn search(&self, term: &str) -> Result<Vec<u8>> {
		let types = catalog::search_types_param(&self.options.types);
		let url = CatalogEndpoint::Search
			.url(&self.options.base_url, &[("types", types.as_str()), (TERM, term)])
			.map_err(TransportError::request)?;
		let authorization = self.authorization.authorization_header().await?;
		let request = CatalogRequest::get(url)
			.with_headers(authorization)
			.with_timeout(self.options.timeout);
		let response = self.transport.send(request).await?;

		if response.status != StatusCode::OK {
			return Err(TransportError::Status { status: response.status }.into());
		}

		Ok(response.body)
	}
}
impl Action for SearchAction {
	fn endpoint(&self) -> Endpoint {
		Endpoint::Search
	}

	fn handle<'a>(&'a self, request: &'a Request) -> ActionFuture<'a> {
		Box::pin(async move {
			let term = Self::term(request)?;

			self.search(term).await
		})
	}
}
impl Debug for SearchAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SearchAction").field("options", &self.options).finish_non_exhaustive()
	}
}
