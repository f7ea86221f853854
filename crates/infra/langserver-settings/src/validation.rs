//! Semantic validation of decoded options.
//!
//! Checks what the static shape of [`Options`] cannot express. Validation is
//! fail-fast: the first violation is returned, with the Terraform path checked
//! before ignored directory names. The only I/O performed is a single `stat`
//! of the configured Terraform binary.

use crate::error::ValidationError;
use crate::types::Options;
use std::path::{MAIN_SEPARATOR, Path};

/// Name of the directory Terraform keeps cached state in. Users cannot ignore it.
pub const DATA_DIR_NAME: &str = ".terraform";

/// Validate options, returning the first violation found.
pub fn validate(options: &Options) -> Result<(), ValidationError> {
    if !options.terraform.path.is_empty() {
        validate_binary_path(&options.terraform.path)?;
    }

    for name in &options.indexing.ignore_directory_names {
        validate_directory_name(name)?;
    }

    Ok(())
}

fn validate_binary_path(raw: &str) -> Result<(), ValidationError> {
    let path = Path::new(raw);
    if !path.is_absolute() {
        return Err(ValidationError::InvalidPath {
            path: raw.to_string(),
        });
    }

    let metadata = std::fs::metadata(path).map_err(|source| ValidationError::BinaryNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        return Err(ValidationError::NotABinary {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

fn validate_directory_name(name: &str) -> Result<(), ValidationError> {
    if name == DATA_DIR_NAME {
        return Err(ValidationError::ReservedNameIgnored {
            name: name.to_string(),
        });
    }

    if name.contains(MAIN_SEPARATOR) {
        return Err(ValidationError::ExpectedNameGotPath {
            name: name.to_string(),
        });
    }

    Ok(())
}
