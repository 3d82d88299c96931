//! Shared cache client for the task handlers
//!
//! The handlers only ever write to the cache; reads, eviction policy and
//! persistence belong to the surrounding system. The trait captures the
//! write contract, with an in-memory implementation for single-process
//! deployments and tests, and a no-op implementation for disabling
//! caching.

use crate::tasks::TaskResult;
use std::time::SystemTime;

/// Cache entry storing a task result with expiry metadata
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub result: TaskResult,
    pub created_at: SystemTime,
    pub expires_at: SystemTime,
}

/// Cache statistics
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub entry_count: usize,
    pub set_count: u64,
    pub expired_count: u64,
}

pub mod memory_cache;
pub mod noop_cache;
pub mod traits;

pub use memory_cache::{MemoryCache, MemoryCacheConfig};
pub use noop_cache::NoOpCache;
pub use traits::SharedCache;
