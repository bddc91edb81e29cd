//! Token cache contract and the built-in in-memory cell.

pub mod memory;

pub use memory::MemoryTokenCache;

// self
use crate::_prelude::*;

/// Boxed future returned by [`TokenCache`] operations.
pub type CacheFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Single-slot store for the current bearer token.
///
/// Implementations carry no validation logic. Reads and writes are serialized, and a write
/// replaces the previous value atomically so readers never observe a partial token.
pub trait TokenCache
where
	Self: Send + Sync,
{
	/// Returns the cached token value, if any.
	fn read(&self) -> CacheFuture<'_, Option<String>>;

	/// Replaces the cached token value.
	fn write(&self, value: String) -> CacheFuture<'_, ()>;
}
