//! One-time process setup: configuration, signing material, and the request handler.
//!
//! Bootstrap never fails because of the secret store. When signing material cannot be fetched or
//! parsed the failure is logged, an [`UnavailableAuthorization`] is installed, and the handler
//! still serves `GET /station`.

// self
use crate::{
	_prelude::*,
	action::SearchOptions,
	auth::{
		AuthorizationProvider, CachedAuthorization, Es256TokenFactory, UnavailableAuthorization,
	},
	cache::MemoryTokenCache,
	config::Config,
	error::AuthError,
	handler::Handler,
	obs,
	secrets::CredentialProvider,
	transport::CatalogTransport,
};

/// Fetches signing material once and composes the standard handler.
pub async fn build_handler(
	config: &Config,
	credentials: &dyn CredentialProvider,
	transport: Arc<dyn CatalogTransport>,
) -> Handler {
	let authorization = authorization(config, credentials).await;

	Handler::standard(authorization, transport, SearchOptions::from(config))
}

/// Builds the authorization provider, falling back to [`UnavailableAuthorization`].
pub async fn authorization(
	config: &Config,
	credentials: &dyn CredentialProvider,
) -> Arc<dyn AuthorizationProvider> {
	match cached_authorization(config, credentials).await {
		Ok(provider) => Arc::new(provider),
		Err(e) => {
			obs::log_degraded("authorization", &e);

			Arc::new(UnavailableAuthorization::new(e.to_string()))
		},
	}
}

async fn cached_authorization(
	config: &Config,
	credentials: &dyn CredentialProvider,
) -> Result<CachedAuthorization> {
	let material = credentials.fetch(&config.secret_name).await?;
	let factory = Es256TokenFactory::new(material).map_err(AuthError::from)?;

	Ok(CachedAuthorization::new(Arc::new(factory), Arc::new(MemoryTokenCache::default())))
}

/// Reads the environment, installs tracing, and builds a handler backed by AWS Secrets Manager
/// and reqwest.
///
/// Only configuration problems fail here; secret store failures degrade the search endpoint.
#[cfg(all(feature = "aws", feature = "reqwest"))]
pub async fn from_env() -> Result<Handler> {
	let config = Config::from_env()?;

	obs::init_tracing(config.log_level)?;

	let credentials = crate::secrets::AwsSecretsProvider::from_region(config.region.clone()).await;
	let transport = crate::transport::ReqwestCatalogTransport::new()?;

	Ok(build_handler(&config, &credentials, Arc::new(transport)).await)
}
