//! SHA-256 checksums of written files.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Compute the `sha256:<hex>` checksum of a file.
pub fn calculate_checksum(path: &Path) -> Result<String> {
    let content = fs::read(path).with_context(|| {
        format!("Cannot read file for checksum calculation: {}", path.display())
    })?;

    Ok(format!("sha256:{}", hex::encode(Sha256::digest(&content))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_checksum_of_known_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.pom");
        std::fs::write(&path, "").unwrap();

        assert_eq!(
            calculate_checksum(&path).unwrap(),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_checksum_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(calculate_checksum(&temp.path().join("missing")).is_err());
    }
}
