//! Immutable bearer token minted by a [`TokenFactory`](crate::auth::TokenFactory).

// self
use crate::{_prelude::*, auth::SecretString};

/// Signed, time-bounded credential presented to the upstream catalog.
///
/// Tokens are never mutated; a fresh token replaces a stale one wholesale.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
	/// Compact JWT; callers must avoid logging it.
	pub value: SecretString,
	/// Instant recorded in the `iat` claim.
	pub issued_at: OffsetDateTime,
	/// Instant recorded in the `exp` claim.
	pub expires_at: OffsetDateTime,
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BearerToken")
			.field("value", &"<redacted>")
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

pub(crate) fn bearer(token: &str) -> String {
	format!("Bearer {token}")
}
