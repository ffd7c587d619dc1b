//! Safety checks to prevent clobbering source files.

use anyhow::{bail, Result};
use std::path::Path;

/// Validates that the output directory is safe to write batch files into.
///
/// Checks:
/// - Output cannot be the same path as any of the provided source files
/// - Output cannot be an existing non-directory path
pub fn validate_output_dir(output: &Path, source_paths: &[&Path]) -> Result<()> {
    for source in source_paths {
        if output == *source {
            bail!(
                "Safety check failed: output '{}' cannot be the same as source '{}'",
                output.display(),
                source.display()
            );
        }
    }

    if output.exists() && !output.is_dir() {
        bail!(
            "Safety check failed: output '{}' exists and is not a directory",
            output.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_valid_output_dir() {
        let output = PathBuf::from("url_mapping_batches");
        let old = PathBuf::from("oldurl.csv");
        let new = PathBuf::from("newurl.csv");
        assert!(validate_output_dir(&output, &[&old, &new]).is_ok());
    }

    #[test]
    fn test_output_equals_source() {
        let path = PathBuf::from("oldurl.csv");
        let result = validate_output_dir(&path, &[&path]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be the same as source"));
    }

    #[test]
    fn test_output_is_existing_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let old = PathBuf::from("oldurl.csv");
        let result = validate_output_dir(f.path(), &[&old]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }
}
