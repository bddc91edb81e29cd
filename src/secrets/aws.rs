//! AWS Secrets Manager [`CredentialProvider`].

// crates.io
use aws_sdk_secretsmanager::{
	Client as SecretsClient,
	config::Region,
	error::{DisplayErrorContext, ProvideErrorMetadata},
	operation::get_secret_value::GetSecretValueError,
};
// self
use crate::{
	_prelude::*,
	auth::SigningMaterial,
	secrets::{CredentialProvider, SecretError, SecretFuture},
};

/// Reads signing material from AWS Secrets Manager.
#[derive(Clone, Debug)]
pub struct AwsSecretsProvider {
	client: SecretsClient,
}
impl AwsSecretsProvider {
	/// Loads the default credential chain, pinned to `region` when given.
	pub async fn from_region(region: Option<String>) -> Self {
		let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

		if let Some(region) = region {
			loader = loader.region(Region::new(region));
		}

		Self::with_client(SecretsClient::new(&loader.load().await))
	}

	/// Wraps a prepared client.
	pub fn with_client(client: SecretsClient) -> Self {
		Self { client }
	}
}
impl CredentialProvider for AwsSecretsProvider {
	fn fetch<'a>(&'a self, secret_id: &'a str) -> SecretFuture<'a, SigningMaterial> {
		Box::pin(async move {
			let response = self
				.client
				.get_secret_value()
				.secret_id(secret_id)
				.send()
				.await
				.map_err(|e| classify(secret_id, e.into_service_error()))?;
			let raw = response.secret_string().ok_or_else(|| SecretError::Malformed {
				message: "secret is stored as binary, not a string".into(),
			})?;

			SigningMaterial::from_json(raw)
		})
	}
}

fn classify(secret_id: &str, e: GetSecretValueError) -> SecretError {
	if e.is_resource_not_found_exception() {
		return SecretError::NotFound { secret_id: secret_id.to_owned() };
	}
	if e.code() == Some("AccessDeniedException") {
		return SecretError::AccessDenied { secret_id: secret_id.to_owned() };
	}

	SecretError::Backend { message: DisplayErrorContext(&e).to_string() }
}
