//! Credential providers that fetch signing material by secret name.

pub mod memory;
#[cfg(feature = "aws")] pub mod aws;

#[cfg(feature = "aws")] pub use aws::AwsSecretsProvider;
pub use memory::StaticCredentialProvider;

// self
use crate::{_prelude::*, auth::SigningMaterial};

/// Secret name used when `SECRET_NAME` is unset.
pub const DEFAULT_SECRET_NAME: &str = "Maxi80-AppleMusicKey";

/// Boxed future returned by [`CredentialProvider::fetch`].
pub type SecretFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SecretError>> + 'a + Send>>;

/// Key-value secret lookup consulted once at startup.
pub trait CredentialProvider
where
	Self: Send + Sync,
{
	/// Fetches and parses the signing material stored under `secret_id`.
	fn fetch<'a>(&'a self, secret_id: &'a str) -> SecretFuture<'a, SigningMaterial>;
}

/// Secret store failures. Messages never carry secret values.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SecretError {
	/// No secret exists under the name.
	#[error("Secret `{secret_id}` was not found.")]
	NotFound {
		/// Requested secret name.
		secret_id: String,
	},
	/// Caller lacks permission to read the secret.
	#[error("Access to secret `{secret_id}` was denied.")]
	AccessDenied {
		/// Requested secret name.
		secret_id: String,
	},
	/// Secret value is not a valid signing material record.
	#[error("Secret value is malformed: {message}.")]
	Malformed {
		/// Field-level description.
		message: String,
	},
	/// Secret backend failed for another reason.
	#[error("Secret backend failed: {message}.")]
	Backend {
		/// Backend-specific description.
		message: String,
	},
}
