//! Task handlers invoked by the external dispatch system
//!
//! Each handler resolves its input string, computes the hash, and returns
//! a [`TaskResult`] carrying the input echo, the encoded hash and the
//! elapsed computation time. The MD5 and SHA-256 handlers additionally
//! write the full result into the shared cache under `"<algo>:<input>"`;
//! the Argon2 handler does not, because its output embeds a fresh random
//! salt per call and a cached entry would not verify on reuse.

use crate::cache::SharedCache;
use crate::config::TaskConfig;
use crate::digests;
use crate::error::{Error, HashingError, Result, ValidationError};
use serde::Deserialize;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Hash task kinds routable by the external dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashTaskKind {
    /// MD5 digest, hex encoded
    Md5,
    /// SHA-256 digest, hex encoded
    Sha256,
    /// Argon2id password hash, PHC encoded
    Argon2,
}

impl HashTaskKind {
    /// Name of the algorithm-specific field in the serialized result
    pub fn result_field(&self) -> &'static str {
        match self {
            HashTaskKind::Md5 => "md5_hash",
            HashTaskKind::Sha256 => "sha256_hash",
            HashTaskKind::Argon2 => "argon2_hash",
        }
    }

    /// Cache key for an input string, `"<algo>:<input>"`
    pub fn cache_key(&self, input: &str) -> String {
        format!("{self}:{input}")
    }
}

impl std::fmt::Display for HashTaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashTaskKind::Md5 => write!(f, "md5"),
            HashTaskKind::Sha256 => write!(f, "sha256"),
            HashTaskKind::Argon2 => write!(f, "argon2"),
        }
    }
}

impl std::str::FromStr for HashTaskKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md5" => Ok(HashTaskKind::Md5),
            "sha256" => Ok(HashTaskKind::Sha256),
            "argon2" => Ok(HashTaskKind::Argon2),
            _ => Err(Error::Validation(ValidationError::unknown_task_kind(s))),
        }
    }
}

/// Parameters supplied by the dispatch system
///
/// The only recognized parameter is the text to hash. Defaulting happens
/// at this boundary: a missing field or a missing parameter set both
/// resolve to the empty string, never to an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskParameters {
    #[serde(default)]
    pub string: Option<String>,
}

impl TaskParameters {
    /// Create parameters carrying the given input text
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: Some(string.into()),
        }
    }

    /// Resolve the input text, defaulting to the empty string
    pub fn resolve_input(params: Option<&TaskParameters>) -> &str {
        params.and_then(|p| p.string.as_deref()).unwrap_or("")
    }
}

/// Result of one task handler invocation
///
/// Serializes to the mapping the dispatch system transports:
/// `original_string`, the algorithm-specific `<algo>_hash` field, and
/// `execution_time_seconds` as a float.
#[derive(Debug, Clone)]
pub struct TaskResult {
    pub kind: HashTaskKind,
    pub original_string: String,
    pub hash: String,
    pub execution_time: Duration,
}

impl TaskResult {
    /// Elapsed computation time in seconds
    pub fn execution_time_seconds(&self) -> f64 {
        self.execution_time.as_secs_f64()
    }
}

impl Serialize for TaskResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("original_string", &self.original_string)?;
        map.serialize_entry(self.kind.result_field(), &self.hash)?;
        map.serialize_entry("execution_time_seconds", &self.execution_time_seconds())?;
        map.end()
    }
}

/// Hash task handler set with an injected shared-cache client
///
/// Handlers hold no mutable state of their own and are safe to invoke
/// concurrently; the cache is the only shared resource.
pub struct HashTaskRunner {
    cache: Arc<dyn SharedCache>,
    config: TaskConfig,
}

impl HashTaskRunner {
    /// Create a runner with default configuration
    pub fn new(cache: Arc<dyn SharedCache>) -> Self {
        Self::with_config(cache, TaskConfig::default())
    }

    /// Create a runner with custom configuration
    pub fn with_config(cache: Arc<dyn SharedCache>, config: TaskConfig) -> Self {
        Self { cache, config }
    }

    /// The runner's configuration
    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// Dispatch a task by kind
    ///
    /// Uniform entry point for the external scheduler; each variant's
    /// cache behaviour stays explicit in its own handler.
    pub async fn run(
        &self,
        kind: HashTaskKind,
        params: Option<&TaskParameters>,
    ) -> Result<TaskResult> {
        match kind {
            HashTaskKind::Md5 => self.md5(params).await,
            HashTaskKind::Sha256 => self.sha256(params).await,
            HashTaskKind::Argon2 => self.argon2(params).await,
        }
    }

    /// MD5 task handler
    pub async fn md5(&self, params: Option<&TaskParameters>) -> Result<TaskResult> {
        let input = TaskParameters::resolve_input(params);

        let start = Instant::now();
        let hash = digests::md5_hex(input.as_bytes());
        let result = TaskResult {
            kind: HashTaskKind::Md5,
            original_string: input.to_string(),
            hash,
            execution_time: start.elapsed(),
        };

        self.cache_result(&result).await;
        Ok(result)
    }

    /// SHA-256 task handler
    pub async fn sha256(&self, params: Option<&TaskParameters>) -> Result<TaskResult> {
        let input = TaskParameters::resolve_input(params);

        let start = Instant::now();
        let hash = digests::sha256_hex(input.as_bytes());
        let result = TaskResult {
            kind: HashTaskKind::Sha256,
            original_string: input.to_string(),
            hash,
            execution_time: start.elapsed(),
        };

        self.cache_result(&result).await;
        Ok(result)
    }

    /// Argon2 task handler
    ///
    /// Never writes to the cache: repeated calls with the same input
    /// produce different encodings by design.
    pub async fn argon2(&self, params: Option<&TaskParameters>) -> Result<TaskResult> {
        let input = TaskParameters::resolve_input(params).to_string();
        let original_string = input.clone();
        let argon2_config = self.config.argon2.clone();

        let start = Instant::now();
        // Memory-hard computation; keep it off the async executor
        let hash = tokio::task::spawn_blocking(move || digests::argon2_encode(&input, &argon2_config))
            .await
            .map_err(|e| HashingError::task_aborted(e.to_string()))??;

        Ok(TaskResult {
            kind: HashTaskKind::Argon2,
            original_string,
            hash,
            execution_time: start.elapsed(),
        })
    }

    /// Store a digest handler's result; failures are logged, not returned
    async fn cache_result(&self, result: &TaskResult) {
        let key = result.kind.cache_key(&result.original_string);
        let ttl = self.config.cache.ttl();

        if let Err(e) = self.cache.set(&key, result, ttl).await {
            log::warn!("Failed to cache result for {key:?}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::NoOpCache;

    #[test]
    fn test_kind_display_and_parse() {
        for (kind, name) in [
            (HashTaskKind::Md5, "md5"),
            (HashTaskKind::Sha256, "sha256"),
            (HashTaskKind::Argon2, "argon2"),
        ] {
            assert_eq!(kind.to_string(), name);
            assert_eq!(name.parse::<HashTaskKind>().unwrap(), kind);
        }

        // Parsing is case insensitive, matching the dispatcher's routing table
        assert_eq!("SHA256".parse::<HashTaskKind>().unwrap(), HashTaskKind::Sha256);
        assert!("blake3".parse::<HashTaskKind>().is_err());
    }

    #[test]
    fn test_kind_result_field_and_cache_key() {
        assert_eq!(HashTaskKind::Md5.result_field(), "md5_hash");
        assert_eq!(HashTaskKind::Sha256.result_field(), "sha256_hash");
        assert_eq!(HashTaskKind::Argon2.result_field(), "argon2_hash");

        assert_eq!(HashTaskKind::Md5.cache_key("hello"), "md5:hello");
        assert_eq!(HashTaskKind::Sha256.cache_key(""), "sha256:");
    }

    #[test]
    fn test_input_resolution_defaults_to_empty() {
        assert_eq!(TaskParameters::resolve_input(None), "");
        assert_eq!(
            TaskParameters::resolve_input(Some(&TaskParameters::default())),
            ""
        );
        assert_eq!(
            TaskParameters::resolve_input(Some(&TaskParameters::new("abc"))),
            "abc"
        );
    }

    #[test]
    fn test_parameters_deserialize_with_missing_field() {
        let params: TaskParameters = serde_json::from_str("{}").unwrap();
        assert!(params.string.is_none());

        let params: TaskParameters = serde_json::from_str(r#"{"string": "abc"}"#).unwrap();
        assert_eq!(params.string.as_deref(), Some("abc"));
    }

    #[test]
    fn test_result_serializes_to_expected_mapping() {
        let result = TaskResult {
            kind: HashTaskKind::Sha256,
            original_string: "abc".to_string(),
            hash: "deadbeef".to_string(),
            execution_time: Duration::from_millis(250),
        };

        let value = serde_json::to_value(&result).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["original_string"], "abc");
        assert_eq!(map["sha256_hash"], "deadbeef");
        assert_eq!(map["execution_time_seconds"], 0.25);
    }

    #[tokio::test]
    async fn test_run_dispatches_by_kind() {
        let runner = HashTaskRunner::new(Arc::new(NoOpCache::new()));
        let params = TaskParameters::new("hello");

        let md5 = runner.run(HashTaskKind::Md5, Some(&params)).await.unwrap();
        assert_eq!(md5.kind, HashTaskKind::Md5);
        assert_eq!(md5.hash, "5d41402abc4b2a76b9719d911017c592");

        let sha256 = runner
            .run(HashTaskKind::Sha256, Some(&params))
            .await
            .unwrap();
        assert_eq!(sha256.kind, HashTaskKind::Sha256);
        assert_eq!(
            sha256.hash,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
