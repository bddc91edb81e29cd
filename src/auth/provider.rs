//! Authorization providers that hand out `Authorization` headers for upstream calls.
//!
//! [`CachedAuthorization`] composes a [`TokenFactory`] with a [`TokenCache`]: the cached token
//! is reused for as long as the factory validates it and replaced wholesale otherwise. The
//! cache lock only covers the individual reads and writes, so two callers that both observe a
//! stale token may each mint a replacement; the last write wins and every reader still sees a
//! complete token.

// self
use crate::{
	_prelude::*,
	auth::{TokenFactory, token},
	cache::TokenCache,
	error::AuthError,
	obs::{self, TokenEvent},
};

/// Name of the header produced by [`AuthorizationProvider::authorization_header`].
pub const AUTHORIZATION: &str = "Authorization";

/// Header map holding a single `Authorization` entry.
pub type AuthorizationHeader = BTreeMap<String, String>;

/// Boxed future returned by [`AuthorizationProvider::authorization_header`].
pub type AuthorizationFuture<'a> =
	Pin<Box<dyn Future<Output = Result<AuthorizationHeader, AuthError>> + 'a + Send>>;

/// Source of `Authorization: Bearer <token>` headers.
pub trait AuthorizationProvider
where
	Self: Send + Sync,
{
	/// Returns a header carrying a currently valid bearer token.
	fn authorization_header(&self) -> AuthorizationFuture<'_>;
}

/// Provider that reuses a cached token until the factory reports it invalid.
#[derive(Clone)]
pub struct CachedAuthorization {
	factory: Arc<dyn TokenFactory>,
	cache: Arc<dyn TokenCache>,
}
impl CachedAuthorization {
	/// Composes the factory with the cache cell it owns for the process lifetime.
	pub fn new(factory: Arc<dyn TokenFactory>, cache: Arc<dyn TokenCache>) -> Self {
		Self { factory, cache }
	}

	/// Returns the current token value, minting and caching a new one when needed.
	pub async fn current_token(&self) -> Result<String, AuthError> {
		match self.cache.read().await {
			Some(cached) if self.factory.validate(Some(&cached)) => {
				obs::record_token_event(TokenEvent::Reused);

				Ok(cached)
			},
			previous => {
				obs::record_token_event(if previous.is_some() {
					TokenEvent::Expired
				} else {
					TokenEvent::Missing
				});

				let fresh = self.factory.generate().inspect_err(|_| {
					obs::record_token_event(TokenEvent::Failed);
				})?;
				let value = fresh.value.expose().to_owned();

				self.cache.write(value.clone()).await;
				obs::record_token_event(TokenEvent::Regenerated);

				Ok(value)
			},
		}
	}
}
impl AuthorizationProvider for CachedAuthorization {
	fn authorization_header(&self) -> AuthorizationFuture<'_> {
		Box::pin(async move {
			let token = self.current_token().await?;

			Ok(AuthorizationHeader::from([(AUTHORIZATION.to_owned(), token::bearer(&token))]))
		})
	}
}
impl Debug for CachedAuthorization {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CachedAuthorization").finish_non_exhaustive()
	}
}

/// Provider installed when signing material could not be obtained at startup.
///
/// Every call fails with [`AuthError::Unavailable`] so the process keeps serving other routes.
#[derive(Clone, Debug)]
pub struct UnavailableAuthorization {
	reason: String,
}
impl UnavailableAuthorization {
	/// Records why authorization is unavailable.
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into() }
	}

	/// Reason recorded during bootstrap.
	pub fn reason(&self) -> &str {
		&self.reason
	}
}
impl AuthorizationProvider for UnavailableAuthorization {
	fn authorization_header(&self) -> AuthorizationFuture<'_> {
		let reason = self.reason.clone();

		Box::pin(async move { Err(AuthError::Unavailable { reason }) })
	}
}
