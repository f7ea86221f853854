use std::path::PathBuf;
use thiserror::Error;

/// A recognized key held a value of the wrong kind.
#[derive(Error, Debug)]
#[error("invalid value for {key}: {message}")]
pub struct DecodeError {
    /// Dotted path of the offending key, `.` for the document root.
    pub key: String,

    /// Expected and actual kind, as reported by the deserializer.
    pub message: String,
}

/// Semantic constraint violated by decoded options.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Expected absolute path for Terraform binary, got {path:?}")]
    InvalidPath { path: String },

    #[error("Unable to find Terraform binary {path}: {source}")]
    BinaryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Expected a Terraform binary, got a directory: {path:?}")]
    NotABinary { path: PathBuf },

    #[error("cannot ignore directory {name:?}")]
    ReservedNameIgnored { name: String },

    #[error("expected directory name, got a path: {name:?}")]
    ExpectedNameGotPath { name: String },
}

impl ValidationError {
    /// Machine-readable code, stable across message wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPath { .. } => "terraform.path.not_absolute",
            Self::BinaryNotFound { .. } => "terraform.path.not_found",
            Self::NotABinary { .. } => "terraform.path.is_directory",
            Self::ReservedNameIgnored { .. } => "indexing.ignore_directory_names.reserved",
            Self::ExpectedNameGotPath { .. } => "indexing.ignore_directory_names.path",
        }
    }
}

/// Failure of the intake pipeline. Only decoding is fatal there.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError {
            key: "ignoreSingleFileWarning".into(),
            message: "invalid type: string \"yes\", expected a boolean".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for ignoreSingleFileWarning: invalid type: string \"yes\", expected a boolean"
        );
    }

    #[test]
    fn test_binary_not_found_keeps_source() {
        use std::error::Error as _;

        let err = ValidationError::BinaryNotFound {
            path: PathBuf::from("/nope/terraform"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.source().is_some());
        assert_eq!(err.code(), "terraform.path.not_found");
    }

    #[test]
    fn test_reserved_name_display() {
        let err = ValidationError::ReservedNameIgnored {
            name: ".terraform".into(),
        };
        assert_eq!(err.to_string(), "cannot ignore directory \".terraform\"");
    }
}
