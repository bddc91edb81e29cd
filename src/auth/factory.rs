//! Developer token factories.
//!
//! [`Es256TokenFactory`] signs Apple Music developer tokens: an ES256 JWT whose header carries
//! the key identifier and whose claims carry the team identifier (`iss`), the issue instant
//! (`iat`), and the expiry (`exp`). Validation verifies the signature with the public half of
//! the same key, the issuer, and the expiry with zero leeway.

// crates.io
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use p256::{
	SecretKey,
	pkcs8::{DecodePrivateKey, EncodePublicKey, LineEnding},
};
// self
use crate::{
	_prelude::*,
	auth::{BearerToken, SecretString, SigningMaterial},
	error::BoxError,
};

/// Lifetime applied to freshly minted tokens.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::hours(24);
/// Longest lifetime the upstream accepts (roughly six months).
pub const MAX_TOKEN_LIFETIME: Duration = Duration::seconds(15_777_000);

/// Mints and validates bearer tokens.
///
/// Validation is a boolean signal: an absent, malformed, foreign, or expired token yields
/// `false` and never an error.
pub trait TokenFactory
where
	Self: Send + Sync,
{
	/// Signs a new token valid from now.
	fn generate(&self) -> Result<BearerToken, SigningError>;

	/// Returns `true` when `token` is present and still valid.
	fn validate(&self, token: Option<&str>) -> bool;
}

/// Errors raised while preparing keys or signing tokens.
#[derive(Debug, ThisError)]
pub enum SigningError {
	/// Private key is not a PKCS#8 PEM encoded P-256 key.
	#[error("Private key is not a valid PKCS#8 P-256 PEM document.")]
	MalformedKey {
		/// Underlying parsing failure.
		#[source]
		source: BoxError,
	},
	/// Requested lifetime is not within `(0, MAX_TOKEN_LIFETIME]`.
	#[error("Token lifetime must be positive and at most {max_secs} seconds.")]
	LifetimeOutOfRange {
		/// Maximum lifetime in seconds.
		max_secs: i64,
	},
	/// JWT encoding failed.
	#[error("Token could not be encoded.")]
	Encoding(#[source] jsonwebtoken::errors::Error),
}
impl SigningError {
	fn malformed_key(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::MalformedKey { source: Box::new(src) }
	}
}

#[derive(Debug, Serialize, Deserialize)]
struct DeveloperClaims {
	iss: String,
	iat: i64,
	exp: i64,
}

/// ES256 factory for Apple Music developer tokens.
pub struct Es256TokenFactory {
	key_id: String,
	issuer_id: String,
	lifetime: Duration,
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
}
impl Es256TokenFactory {
	/// Parses the signing material using [`DEFAULT_TOKEN_LIFETIME`].
	pub fn new(material: SigningMaterial) -> Result<Self, SigningError> {
		Self::with_lifetime(material, DEFAULT_TOKEN_LIFETIME)
	}

	/// Parses the signing material with a custom token lifetime.
	pub fn with_lifetime(material: SigningMaterial, lifetime: Duration) -> Result<Self, SigningError> {
		if !lifetime.is_positive() || lifetime > MAX_TOKEN_LIFETIME {
			return Err(SigningError::LifetimeOutOfRange {
				max_secs: MAX_TOKEN_LIFETIME.whole_seconds(),
			});
		}

		let SigningMaterial { private_key, key_id, issuer_id } = material;
		let (encoding_key, decoding_key) = Self::keys(&private_key)?;

		Ok(Self { key_id, issuer_id, lifetime, encoding_key, decoding_key })
	}

	/// Lifetime applied to each generated token.
	pub fn lifetime(&self) -> Duration {
		self.lifetime
	}

	/// Signs a token whose validity window starts at `now`.
	pub fn generate_at(&self, now: OffsetDateTime) -> Result<BearerToken, SigningError> {
		let issued_at = now.replace_nanosecond(0).unwrap_or(now);
		let expires_at = issued_at + self.lifetime;
		let mut header = Header::new(Algorithm::ES256);

		header.kid = Some(self.key_id.clone());

		let claims = DeveloperClaims {
			iss: self.issuer_id.clone(),
			iat: issued_at.unix_timestamp(),
			exp: expires_at.unix_timestamp(),
		};
		let value = jsonwebtoken::encode(&header, &claims, &self.encoding_key)
			.map_err(SigningError::Encoding)?;

		Ok(BearerToken { value: SecretString::new(value), issued_at, expires_at })
	}

	fn keys(private_key: &SecretString) -> Result<(EncodingKey, DecodingKey), SigningError> {
		let pem = private_key.expose().trim();
		let secret = SecretKey::from_pkcs8_pem(pem).map_err(SigningError::malformed_key)?;
		let public_pem =
			secret.public_key().to_public_key_pem(LineEnding::LF).map_err(SigningError::malformed_key)?;
		let encoding_key =
			EncodingKey::from_ec_pem(pem.as_bytes()).map_err(SigningError::malformed_key)?;
		let decoding_key =
			DecodingKey::from_ec_pem(public_pem.as_bytes()).map_err(SigningError::malformed_key)?;

		Ok((encoding_key, decoding_key))
	}

	fn validation(&self) -> Validation {
		let mut validation = Validation::new(Algorithm::ES256);

		validation.leeway = 0;
		validation.set_issuer(&[self.issuer_id.as_str()]);
		validation.set_required_spec_claims(&["exp", "iss", "iat"]);

		validation
	}
}
impl TokenFactory for Es256TokenFactory {
	fn generate(&self) -> Result<BearerToken, SigningError> {
		self.generate_at(OffsetDateTime::now_utc())
	}

	fn validate(&self, token: Option<&str>) -> bool {
		let Some(token) = token else {
			return false;
		};

		jsonwebtoken::decode::<DeveloperClaims>(token, &self.decoding_key, &self.validation()).is_ok()
	}
}
impl Debug for Es256TokenFactory {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Es256TokenFactory")
			.field("key_id", &self.key_id)
			.field("issuer_id", &self.issuer_id)
			.field("lifetime", &self.lifetime)
			.finish_non_exhaustive()
	}
}
