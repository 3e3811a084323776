//! Key-value store abstraction
//!
//! The router only issues `get`/`put` calls; the actual storage backend is
//! pluggable so the server binary and the tests can run against an in-memory
//! implementation.

mod memory;

pub use memory::MemoryKvStore;

use async_trait::async_trait;

/// KV operation result.
pub type KvResult<T> = Result<T, KvError>;

/// KV store errors.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Durable key-value store capability.
///
/// Operations are single-shot: a failed call is not retried and surfaces as
/// the request's failure response.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn put(&self, key: &str, value: &str) -> KvResult<()>;
}
