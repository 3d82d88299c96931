//! Error types for the hash task handlers
//!
//! Errors are grouped into categories: hashing faults raised by the digest
//! or password-hash primitives, cache write failures surfaced by cache
//! client implementations, validation errors for malformed task routing or
//! configuration, and configuration load failures.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hash task handlers
#[derive(Error, Debug)]
pub enum Error {
    /// Digest or password-hash computation errors
    #[error(transparent)]
    Hashing(#[from] HashingError),

    /// Shared cache write errors
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Input validation and routing errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration load errors
    #[error(transparent)]
    Config(#[from] figment::Error),
}

/// Errors raised inside the hashing primitives
#[derive(Error, Debug)]
pub enum HashingError {
    /// Argon2 encoding failed
    #[error("Argon2 hashing failed: {message}")]
    Argon2 { message: String },

    /// Cost parameters rejected by the algorithm
    #[error("Invalid hash parameters: {message}")]
    InvalidParams { message: String },

    /// The blocking hash task stopped before producing a result
    #[error("Hash task aborted: {message}")]
    TaskAborted { message: String },
}

impl HashingError {
    /// Create an Argon2 encoding error
    pub fn argon2(message: impl Into<String>) -> Self {
        Self::Argon2 {
            message: message.into(),
        }
    }

    /// Create an invalid-parameters error
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create an aborted-task error
    pub fn task_aborted(message: impl Into<String>) -> Self {
        Self::TaskAborted {
            message: message.into(),
        }
    }
}

/// Errors raised by shared cache implementations
#[derive(Error, Debug)]
pub enum CacheError {
    /// A cache write failed
    #[error("Cache write failed for key '{key}': {message}")]
    Write { key: String, message: String },
}

impl CacheError {
    /// Create a cache write error
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Input validation and routing errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Task name did not match any registered handler
    #[error("Unknown hash task kind: {name}")]
    UnknownTaskKind { name: String },

    /// Configuration values rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ValidationError {
    /// Create an unknown-task-kind error
    pub fn unknown_task_kind(name: impl Into<String>) -> Self {
        Self::UnknownTaskKind { name: name.into() }
    }

    /// Create an invalid-configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
