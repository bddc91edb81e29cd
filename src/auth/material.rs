//! Signing material fetched once from the secret store.

// self
use crate::{_prelude::*, auth::SecretString, secrets::SecretError};

/// Private key and identifiers required to mint Apple Music developer tokens.
///
/// The secret store keeps this record as JSON using the field names Apple's developer
/// portal exposes: `{"privateKey": "...", "keyId": "...", "teamId": "..."}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningMaterial {
	/// PKCS#8 PEM document holding the P-256 private key.
	#[serde(rename = "privateKey")]
	pub private_key: SecretString,
	/// Key identifier placed in the token `kid` header.
	#[serde(rename = "keyId")]
	pub key_id: String,
	/// Team identifier placed in the `iss` claim.
	#[serde(rename = "teamId")]
	pub issuer_id: String,
}
impl SigningMaterial {
	/// Builds signing material from its parts.
	pub fn new(
		private_key: impl Into<String>,
		key_id: impl Into<String>,
		issuer_id: impl Into<String>,
	) -> Self {
		Self {
			private_key: SecretString::new(private_key),
			key_id: key_id.into(),
			issuer_id: issuer_id.into(),
		}
	}

	/// Parses the secret-store JSON representation.
	///
	/// Errors only name the offending field so key material never reaches logs.
	pub fn from_json(raw: &str) -> Result<Self, SecretError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let material: Self = serde_path_to_error::deserialize(&mut de).map_err(|e| {
			SecretError::Malformed { message: format!("field `{}` is missing or invalid", e.path()) }
		})?;

		material.ensure_complete()?;

		Ok(material)
	}

	/// Serializes the record back into the secret-store layout.
	pub fn to_json(&self) -> Result<String, SecretError> {
		serde_json::to_string(self)
			.map_err(|_| SecretError::Malformed { message: "record cannot be serialized".into() })
	}

	fn ensure_complete(&self) -> Result<(), SecretError> {
		let blank = if self.private_key.is_blank() {
			Some("privateKey")
		} else if self.key_id.trim().is_empty() {
			Some("keyId")
		} else if self.issuer_id.trim().is_empty() {
			Some("teamId")
		} else {
			None
		};

		match blank {
			Some(field) => Err(SecretError::Malformed { message: format!("field `{field}` is empty") }),
			None => Ok(()),
		}
	}
}
impl Debug for SigningMaterial {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SigningMaterial")
			.field("private_key", &"<redacted>")
			.field("key_id", &self.key_id)
			.field("issuer_id", &self.issuer_id)
			.finish()
	}
}
