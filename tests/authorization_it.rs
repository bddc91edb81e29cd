mod support;

// std
use std::sync::Arc;
// crates.io
use time::{Duration, OffsetDateTime};
// self
use maxi80_backend::{
	auth::{
		AUTHORIZATION, AuthorizationProvider, CachedAuthorization, Es256TokenFactory,
		SigningMaterial, TokenFactory,
	},
	cache::{MemoryTokenCache, TokenCache},
};
use support::{
	OTHER_PRIVATE_KEY, StubTokenFactory, TEST_KEY_ID, TEST_TEAM_ID, test_signing_material,
};

fn es256_factory() -> Es256TokenFactory {
	Es256TokenFactory::new(test_signing_material()).expect("Fixture key should build a factory.")
}

#[tokio::test]
async fn sequential_calls_reuse_cached_token() {
	let factory = Arc::new(StubTokenFactory::new());
	let provider =
		CachedAuthorization::new(factory.clone(), Arc::new(MemoryTokenCache::default()));
	let first = provider.authorization_header().await.expect("First header should be minted.");
	let second = provider.authorization_header().await.expect("Second header should be reused.");

	assert_eq!(first, second);
	assert_eq!(first.get(AUTHORIZATION).map(String::as_str), Some("Bearer stub-token-1"));
	assert_eq!(factory.generated(), 1);
}

#[tokio::test]
async fn invalid_cached_token_is_replaced() {
	let factory = Arc::new(StubTokenFactory::new());
	let cache = MemoryTokenCache::default();
	let provider = CachedAuthorization::new(factory.clone(), Arc::new(cache.clone()));

	provider.authorization_header().await.expect("First header should be minted.");
	factory.set_valid(false);

	let header = provider.authorization_header().await.expect("Stale token should be replaced.");

	assert_eq!(header.get(AUTHORIZATION).map(String::as_str), Some("Bearer stub-token-2"));
	assert_eq!(cache.read().await.as_deref(), Some("stub-token-2"));
	assert_eq!(factory.generated(), 2);
}

#[tokio::test]
async fn concurrent_callers_always_see_complete_tokens() {
	let factory = Arc::new(StubTokenFactory::new());
	let provider =
		Arc::new(CachedAuthorization::new(factory.clone(), Arc::new(MemoryTokenCache::default())));
	let tasks = (0..16)
		.map(|_| {
			let provider = provider.clone();

			tokio::spawn(async move { provider.current_token().await })
		})
		.collect::<Vec<_>>();

	for task in tasks {
		let token = task
			.await
			.expect("Authorization task should not panic.")
			.expect("Authorization should succeed.");

		assert!(token.starts_with("stub-token-"));
	}

	assert!(factory.generated() >= 1);
}

#[test]
fn es256_tokens_validate_until_expiry() {
	let factory = es256_factory();
	let fresh = factory.generate().expect("Token should be signed.");
	let stale = factory
		.generate_at(OffsetDateTime::now_utc() - Duration::days(2))
		.expect("Backdated token should be signed.");

	assert!(!factory.validate(None));
	assert!(factory.validate(Some(fresh.value.expose())));
	assert!(!factory.validate(Some(stale.value.expose())));
	assert!(!factory.validate(Some("not.a.jwt")));
	assert_eq!(fresh.expires_at - fresh.issued_at, Duration::hours(24));
}

#[test]
fn es256_rejects_foreign_issuer_and_key() {
	let factory = es256_factory();
	let foreign_issuer = Es256TokenFactory::new(SigningMaterial::new(
		support::TEST_PRIVATE_KEY,
		TEST_KEY_ID,
		"OTHERTEAM1",
	))
	.expect("Fixture key should build a factory.");
	let foreign_key =
		Es256TokenFactory::new(SigningMaterial::new(OTHER_PRIVATE_KEY, TEST_KEY_ID, TEST_TEAM_ID))
			.expect("Second fixture key should build a factory.");
	let issued = foreign_issuer.generate().expect("Token should be signed.");
	let signed = foreign_key.generate().expect("Token should be signed.");

	assert!(!factory.validate(Some(issued.value.expose())));
	assert!(!factory.validate(Some(signed.value.expose())));
}

#[tokio::test]
async fn es256_provider_emits_bearer_header() {
	let cache = MemoryTokenCache::default();
	let factory = Arc::new(es256_factory());
	let provider = CachedAuthorization::new(factory.clone(), Arc::new(cache.clone()));
	let header = provider.authorization_header().await.expect("Header should be minted.");
	let value = header.get(AUTHORIZATION).expect("Header should carry Authorization.");
	let token = value.strip_prefix("Bearer ").expect("Header should use the Bearer scheme.");

	assert!(factory.validate(Some(token)));
	assert_eq!(cache.read().await.as_deref(), Some(token));
}
