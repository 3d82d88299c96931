//! Hash Task Handler Library
//!
//! This library provides the task handlers invoked by the external
//! task-dispatch system: MD5 and SHA-256 digests and Argon2 password
//! hashes over a supplied string, each returned together with the elapsed
//! computation time. The digest handlers additionally write their result
//! into a shared cache under a TTL; the Argon2 handler intentionally does
//! not.

pub mod cache;
pub mod config;
pub mod digests;
pub mod error;
pub mod tasks;

// Re-export main types
pub use cache::{MemoryCache, MemoryCacheConfig, NoOpCache, SharedCache};
pub use config::{Argon2Config, CacheWriteConfig, TaskConfig};
pub use error::{Error, Result};
pub use tasks::{HashTaskKind, HashTaskRunner, TaskParameters, TaskResult};
