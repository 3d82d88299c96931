//! Cache trait definitions

use crate::error::Result;
use crate::tasks::TaskResult;
use async_trait::async_trait;
use std::time::Duration;

/// Client contract for the external shared cache
///
/// The task handlers issue independent, non-transactional writes and never
/// read back during execution, so the contract is write-only.
#[async_trait]
pub trait SharedCache: Send + Sync {
    /// Store a task result under `key`, expiring after `ttl`
    ///
    /// Implementations decide how write failures surface; the handlers log
    /// and absorb them rather than failing the task.
    async fn set(&self, key: &str, value: &TaskResult, ttl: Duration) -> Result<()>;
}
