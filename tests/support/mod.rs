//! Stubs and key fixtures shared by integration tests.

#![allow(dead_code)]

// std
use std::{
	collections::BTreeMap,
	sync::{
		Arc,
		atomic::{AtomicBool, AtomicUsize, Ordering},
	},
};
// crates.io
use http::StatusCode;
use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};
// self
use maxi80_backend::{
	auth::{
		AUTHORIZATION, AuthorizationFuture, AuthorizationHeader, AuthorizationProvider, BearerToken,
		SecretString, SigningError, SigningMaterial, TokenFactory,
	},
	error::TransportError,
	transport::{CatalogRequest, CatalogResponse, CatalogTransport, TransportFuture},
};

/// PKCS#8 P-256 key used to sign test tokens.
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/es256_primary.p8");
/// Second, unrelated P-256 key.
pub const OTHER_PRIVATE_KEY: &str = include_str!("../fixtures/es256_other.p8");
/// Key identifier paired with [`TEST_PRIVATE_KEY`].
pub const TEST_KEY_ID: &str = "ABC123DEFG";
/// Team identifier used as the token issuer.
pub const TEST_TEAM_ID: &str = "TEAM456HIJ";

/// Signing material built from the primary fixture key.
pub fn test_signing_material() -> SigningMaterial {
	SigningMaterial::new(TEST_PRIVATE_KEY, TEST_KEY_ID, TEST_TEAM_ID)
}

/// Factory minting `stub-token-N` values; validity is toggled by the test.
pub struct StubTokenFactory {
	generated: AtomicUsize,
	valid: AtomicBool,
}
impl StubTokenFactory {
	pub fn new() -> Self {
		Self { generated: AtomicUsize::new(0), valid: AtomicBool::new(true) }
	}

	pub fn generated(&self) -> usize {
		self.generated.load(Ordering::SeqCst)
	}

	pub fn set_valid(&self, valid: bool) {
		self.valid.store(valid, Ordering::SeqCst);
	}
}
impl TokenFactory for StubTokenFactory {
	fn generate(&self) -> Result<BearerToken, SigningError> {
		let n = self.generated.fetch_add(1, Ordering::SeqCst) + 1;
		let now = OffsetDateTime::now_utc();

		Ok(BearerToken {
			value: SecretString::new(format!("stub-token-{n}")),
			issued_at: now,
			expires_at: now + Duration::hours(24),
		})
	}

	fn validate(&self, token: Option<&str>) -> bool {
		token.is_some() && self.valid.load(Ordering::SeqCst)
	}
}

/// Provider returning a fixed header and counting calls.
#[derive(Default)]
pub struct RecordingAuthorization {
	calls: AtomicUsize,
}
impl RecordingAuthorization {
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl AuthorizationProvider for RecordingAuthorization {
	fn authorization_header(&self) -> AuthorizationFuture<'_> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async {
			Ok(AuthorizationHeader::from([(AUTHORIZATION.to_owned(), "Bearer recorded".to_owned())]))
		})
	}
}

/// Transport answering every request with a canned status and body.
pub struct StubTransport {
	status: StatusCode,
	body: Vec<u8>,
	sent: Mutex<Vec<CatalogRequest>>,
}
impl StubTransport {
	pub fn ok(body: impl Into<Vec<u8>>) -> Arc<Self> {
		Self::with_status(StatusCode::OK, body)
	}

	pub fn with_status(status: StatusCode, body: impl Into<Vec<u8>>) -> Arc<Self> {
		Arc::new(Self { status, body: body.into(), sent: Mutex::new(Vec::new()) })
	}

	pub fn sent(&self) -> Vec<CatalogRequest> {
		self.sent.lock().clone()
	}
}
impl CatalogTransport for StubTransport {
	fn send(&self, request: CatalogRequest) -> TransportFuture<'_> {
		self.sent.lock().push(request);

		let status = self.status;
		let body = self.body.clone();

		Box::pin(async move {
			if status == StatusCode::OK {
				Ok(CatalogResponse { status, body })
			} else {
				Err(TransportError::Status { status })
			}
		})
	}
}

/// Headers of the first recorded request, for assertions.
pub fn first_headers(transport: &StubTransport) -> BTreeMap<String, String> {
	transport.sent().into_iter().next().map(|request| request.headers).unwrap_or_default()
}
