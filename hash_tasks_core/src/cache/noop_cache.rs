//! No-operation cache implementation
//!
//! Useful for disabling caching in certain environments and for
//! benchmarking the handlers without cache effects.

use crate::cache::traits::SharedCache;
use crate::error::Result;
use crate::tasks::TaskResult;
use async_trait::async_trait;
use std::time::Duration;

/// A cache implementation that doesn't cache anything
pub struct NoOpCache;

impl NoOpCache {
    /// Create a new no-op cache
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SharedCache for NoOpCache {
    async fn set(&self, _key: &str, _value: &TaskResult, _ttl: Duration) -> Result<()> {
        // Silently discard the value
        Ok(())
    }
}

impl Default for NoOpCache {
    fn default() -> Self {
        Self::new()
    }
}
