//! Installation fingerprints.
//!
//! A fingerprint keys installer state in the session so that installers for
//! different SciClope copies (another directory, another version) sharing a
//! browser session don't see each other's progress. It is a namespacing key,
//! not a secret.

use std::path::Path;

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("malformed fingerprint input: {0}")]
    Malformed(String),

    #[error("failed to serialize fingerprint input: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct FingerprintInput<'a> {
    path: &'a str,
    version: &'a str,
}

/// Derive the fingerprint for an installation at `install_path` running
/// `version`.
pub fn fingerprint(install_path: &Path, version: &str) -> Result<String, FingerprintError> {
    let path = install_path.to_string_lossy();
    if path.is_empty() {
        return Err(FingerprintError::Malformed("empty install path".to_string()));
    }
    if version.trim().is_empty() {
        return Err(FingerprintError::Malformed("empty version".to_string()));
    }

    let canonical = serde_json::to_vec(&FingerprintInput {
        path: &path,
        version,
    })?;
    Ok(hex::encode(Sha256::digest(&canonical)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = fingerprint(Path::new("/srv/sciclope"), "1.0.0").unwrap();
        let b = fingerprint(Path::new("/srv/sciclope"), "1.0.0").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_path_changes_fingerprint() {
        let a = fingerprint(Path::new("/srv/sciclope"), "1.0.0").unwrap();
        let b = fingerprint(Path::new("/srv/sciclope2"), "1.0.0").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_version_changes_fingerprint() {
        let a = fingerprint(Path::new("/srv/sciclope"), "1.0.0").unwrap();
        let b = fingerprint(Path::new("/srv/sciclope"), "1.0.1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_field_boundaries_are_unambiguous() {
        // Plain concatenation would make these equal.
        let a = fingerprint(Path::new("/srv/a"), "b1").unwrap();
        let b = fingerprint(Path::new("/srv/ab"), "1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            fingerprint(Path::new(""), "1.0.0"),
            Err(FingerprintError::Malformed(_))
        ));
        assert!(matches!(
            fingerprint(Path::new("/srv"), " "),
            Err(FingerprintError::Malformed(_))
        ));
    }
}
