//! Static [`CredentialProvider`] for tests and local runs.

// self
use crate::{
	_prelude::*,
	auth::SigningMaterial,
	secrets::{CredentialProvider, SecretError, SecretFuture},
};

/// Holds raw secret JSON keyed by secret name.
#[derive(Clone, Default)]
pub struct StaticCredentialProvider {
	secrets: HashMap<String, String>,
}
impl StaticCredentialProvider {
	/// Stores a raw JSON value under `secret_id`.
	pub fn with_secret(mut self, secret_id: impl Into<String>, raw: impl Into<String>) -> Self {
		self.secrets.insert(secret_id.into(), raw.into());

		self
	}

	/// Stores `material` under `secret_id` using the secret-store layout.
	pub fn with_material(
		self,
		secret_id: impl Into<String>,
		material: &SigningMaterial,
	) -> Result<Self, SecretError> {
		let raw = material.to_json()?;

		Ok(self.with_secret(secret_id, raw))
	}
}
impl CredentialProvider for StaticCredentialProvider {
	fn fetch<'a>(&'a self, secret_id: &'a str) -> SecretFuture<'a, SigningMaterial> {
		Box::pin(async move {
			let raw = self
				.secrets
				.get(secret_id)
				.ok_or_else(|| SecretError::NotFound { secret_id: secret_id.to_owned() })?;

			SigningMaterial::from_json(raw)
		})
	}
}
impl Debug for StaticCredentialProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("StaticCredentialProvider")
			.field("secrets", &self.secrets.keys().collect::<Vec<_>>())
			.finish()
	}
}
