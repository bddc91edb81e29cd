//! Process-local [`TokenCache`] cell guarded by a read/write lock.

// self
use crate::{
	_prelude::*,
	cache::{CacheFuture, TokenCache},
};

type Cell = Arc<RwLock<Option<Arc<str>>>>;

/// In-memory token cell; starts empty and is only ever replaced, never cleared.
#[derive(Clone, Default)]
pub struct MemoryTokenCache(Cell);
impl MemoryTokenCache {
	/// Creates a cell pre-populated with `value`.
	pub fn with_token(value: impl Into<String>) -> Self {
		let value: String = value.into();

		Self(Arc::new(RwLock::new(Some(Arc::from(value)))))
	}

	/// Returns `true` when a token has been stored.
	pub fn is_populated(&self) -> bool {
		self.0.read().is_some()
	}

	fn read_now(cell: &Cell) -> Option<String> {
		cell.read().as_deref().map(str::to_owned)
	}

	fn write_now(cell: &Cell, value: String) {
		*cell.write() = Some(Arc::from(value));
	}
}
impl TokenCache for MemoryTokenCache {
	fn read(&self) -> CacheFuture<'_, Option<String>> {
		let cell = self.0.clone();

		Box::pin(async move { Self::read_now(&cell) })
	}

	fn write(&self, value: String) -> CacheFuture<'_, ()> {
		let cell = self.0.clone();

		Box::pin(async move { Self::write_now(&cell, value) })
	}
}
impl Debug for MemoryTokenCache {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MemoryTokenCache").field("populated", &self.is_populated()).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn starts_empty_and_replaces_wholesale() {
		let cache = MemoryTokenCache::default();

		assert_eq!(cache.read().await, None);

		cache.write("first".into()).await;
		cache.write("second".into()).await;

		assert_eq!(cache.read().await.as_deref(), Some("second"));
	}

	#[tokio::test]
	async fn clones_share_the_same_cell() {
		let cache = MemoryTokenCache::with_token("seed");
		let clone = cache.clone();

		clone.write("rotated".into()).await;

		assert_eq!(cache.read().await.as_deref(), Some("rotated"));
		assert_eq!(format!("{cache:?}"), "MemoryTokenCache { populated: true }");
	}

	#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
	async fn concurrent_writers_never_tear_values() {
		let cache = Arc::new(MemoryTokenCache::default());
		let tokens = ["a".repeat(512), "b".repeat(512), "c".repeat(512), "d".repeat(512)];
		let writers = tokens
			.iter()
			.cloned()
			.map(|token| {
				let cache = cache.clone();

				tokio::spawn(async move {
					for _ in 0..64 {
						cache.write(token.clone()).await;
					}
				})
			})
			.collect::<Vec<_>>();

		for _ in 0..256 {
			if let Some(value) = cache.read().await {
				assert!(tokens.contains(&value), "Reader observed a torn token.");
			}
		}
		for writer in writers {
			writer.await.expect("Writer task should not panic.");
		}

		let last = cache.read().await.expect("Cache should hold a token after writes.");

		assert!(tokens.contains(&last));
	}
}
