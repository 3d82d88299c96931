//! Handler configuration
//!
//! Defaults match the deployed task system: a one hour cache TTL for the
//! digest handlers and Argon2 costs of 6 passes over 64 MiB with two
//! lanes. Values can be layered from a TOML file and from
//! `HASH_TASKS_`-prefixed environment variables.

use crate::error::Result;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the hash task handlers
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct TaskConfig {
    #[serde(default)]
    pub cache: CacheWriteConfig,

    #[serde(default)]
    pub argon2: Argon2Config,
}

/// Cache write behaviour of the digest handlers
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CacheWriteConfig {
    /// Time-to-live for cached results, in seconds
    pub ttl_seconds: u64,
}

/// Argon2 cost parameters
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Argon2Config {
    /// Number of passes over memory
    pub time_cost: u32,
    /// Memory usage in KiB
    pub memory_cost_kib: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for CacheWriteConfig {
    fn default() -> Self {
        Self { ttl_seconds: 3600 }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            time_cost: 6,
            memory_cost_kib: 65536,
            parallelism: 2,
        }
    }
}

impl CacheWriteConfig {
    /// TTL as a `Duration`
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl TaskConfig {
    /// Load configuration with defaults, overridden by `hash_tasks.toml`
    /// and then by `HASH_TASKS_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(TaskConfig::default()))
            .merge(Toml::file("hash_tasks.toml"))
            .merge(Env::prefixed("HASH_TASKS_").split("__"));

        Ok(figment.extract()?)
    }
}
