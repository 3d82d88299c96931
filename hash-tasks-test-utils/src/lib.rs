//! Test utilities for the hash task crates
//!
//! Provides a recording cache mock so dependent tests can assert exactly
//! which cache writes a handler issued, and exercise the handlers'
//! behaviour when the cache misbehaves, without a real cache backend.

use async_trait::async_trait;
use hash_tasks_core::error::{CacheError, Error, Result};
use hash_tasks_core::{SharedCache, TaskResult};
use std::sync::Mutex;
use std::time::Duration;

/// One recorded `set` call
#[derive(Debug, Clone)]
pub struct RecordedSet {
    pub key: String,
    pub result: TaskResult,
    pub ttl: Duration,
}

/// Cache mock that records every write
///
/// # Examples
///
/// ```rust
/// use hash_tasks_core::{HashTaskRunner, TaskParameters};
/// use hash_tasks_test_utils::RecordingCache;
/// use std::sync::Arc;
///
/// # async fn example() -> hash_tasks_core::Result<()> {
/// let cache = Arc::new(RecordingCache::new());
/// let runner = HashTaskRunner::new(cache.clone());
///
/// runner.md5(Some(&TaskParameters::new("abc"))).await?;
/// assert_eq!(cache.set_count(), 1);
/// assert_eq!(cache.recorded()[0].key, "md5:abc");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct RecordingCache {
    sets: Mutex<Vec<RecordedSet>>,
    fail_writes: Mutex<bool>,
}

impl RecordingCache {
    /// Create a new recording cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` call fail
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// All recorded `set` calls, in invocation order
    pub fn recorded(&self) -> Vec<RecordedSet> {
        self.sets.lock().unwrap().clone()
    }

    /// Number of recorded `set` calls
    pub fn set_count(&self) -> usize {
        self.sets.lock().unwrap().len()
    }
}

#[async_trait]
impl SharedCache for RecordingCache {
    async fn set(&self, key: &str, value: &TaskResult, ttl: Duration) -> Result<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(Error::Cache(CacheError::write(key, "injected write failure")));
        }

        self.sets.lock().unwrap().push(RecordedSet {
            key: key.to_string(),
            result: value.clone(),
            ttl,
        });

        Ok(())
    }
}
