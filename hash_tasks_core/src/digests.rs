//! Digest and password-hash primitives
//!
//! Thin wrappers over the hashing crates. Digests are rendered as
//! lowercase hex; Argon2 output is the PHC string produced by the crate,
//! which embeds algorithm, version, costs and a fresh random salt.

use crate::config::Argon2Config;
use crate::error::{HashingError, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use md5::{Digest, Md5};
use sha2::Sha256;

/// MD5 digest of `data` as lowercase hex
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// SHA-256 digest of `data` as lowercase hex
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Argon2id hash of `input` with the given costs, as a PHC string
///
/// Every call generates a new random salt, so repeated calls with the same
/// input produce different encodings that all verify against it.
pub fn argon2_encode(input: &str, config: &Argon2Config) -> Result<String> {
    let params = Params::new(
        config.memory_cost_kib,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| HashingError::invalid_params(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let encoded = argon2
        .hash_password(input.as_bytes(), &salt)
        .map_err(|e| HashingError::argon2(e.to_string()))?;

    Ok(encoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};
    use proptest::prelude::*;

    fn fast_config() -> Argon2Config {
        Argon2Config {
            time_cost: 1,
            memory_cost_kib: 1024,
            parallelism: 1,
        }
    }

    /// Test MD5 with known test vectors
    #[test]
    fn test_md5_known_vectors() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (b"", "d41d8cd98f00b204e9800998ecf8427e"),
            (b"a", "0cc175b9c0f1b6a831c399e269772661"),
            (b"hello", "5d41402abc4b2a76b9719d911017c592"),
            (
                b"The quick brown fox jumps over the lazy dog",
                "9e107d9d372bb6826bd81d3542a419d6",
            ),
        ];

        for (input, expected) in test_cases {
            let hash = md5_hex(input);
            assert_eq!(hash, expected, "MD5 mismatch for input: {input:?}");
            assert_eq!(hash.len(), 32);
        }
    }

    /// Test SHA-256 with known test vectors
    #[test]
    fn test_sha256_known_vectors() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (
                b"",
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                b"abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                b"hello",
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            ),
        ];

        for (input, expected) in test_cases {
            let hash = sha256_hex(input);
            assert_eq!(hash, expected, "SHA-256 mismatch for input: {input:?}");
            assert_eq!(hash.len(), 64);
        }
    }

    #[test]
    fn test_argon2_encoding_verifies() {
        let encoded = argon2_encode("correct horse battery staple", &fast_config()).unwrap();

        assert!(encoded.starts_with("$argon2id$v=19$"));

        let parsed = PasswordHash::new(&encoded).unwrap();
        Argon2::default()
            .verify_password(b"correct horse battery staple", &parsed)
            .unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"wrong password", &parsed)
                .is_err()
        );
    }

    #[test]
    fn test_argon2_fresh_salt_per_call() {
        let config = fast_config();
        let first = argon2_encode("same input", &config).unwrap();
        let second = argon2_encode("same input", &config).unwrap();

        // Distinct salt, distinct encoding; both must still verify
        assert_ne!(first, second);
        for encoded in [&first, &second] {
            let parsed = PasswordHash::new(encoded).unwrap();
            Argon2::default()
                .verify_password(b"same input", &parsed)
                .unwrap();
        }
    }

    #[test]
    fn test_argon2_embeds_configured_costs() {
        let encoded = argon2_encode("pw", &Argon2Config::default()).unwrap();
        assert!(encoded.contains("m=65536,t=6,p=2"));
    }

    #[test]
    fn test_argon2_rejects_bad_params() {
        let config = Argon2Config {
            time_cost: 0,
            memory_cost_kib: 1024,
            parallelism: 1,
        };

        let err = argon2_encode("pw", &config).unwrap_err();
        assert!(err.to_string().contains("Invalid hash parameters"));
    }

    proptest! {
        #[test]
        fn test_digest_determinism(data: Vec<u8>) {
            prop_assert_eq!(md5_hex(&data), md5_hex(&data));
            prop_assert_eq!(sha256_hex(&data), sha256_hex(&data));
        }

        #[test]
        fn test_digest_format(data: Vec<u8>) {
            let md5 = md5_hex(&data);
            let sha256 = sha256_hex(&data);

            prop_assert_eq!(md5.len(), 32);
            prop_assert_eq!(sha256.len(), 64);
            prop_assert!(md5.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            prop_assert!(sha256.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
