//! Settings intake pipeline.
//!
//! The steps:
//! 1. Decode the client document into typed options (fatal on type mismatch)
//! 2. Fold legacy keys into their modern counterparts
//! 3. Validate the effective options
//!
//! Unused and deprecated keys become advisory warnings. A validation failure
//! is reported, not raised, so the caller decides whether it blocks startup.

use crate::decode::decode_options;
use crate::error::{IntakeError, ValidationError};
use crate::legacy::resolve_legacy;
use crate::types::Options;
use crate::validation::validate;
use serde_json::Value;

/// An advisory warning about a settings document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryWarning {
    /// Machine-readable warning code.
    pub code: &'static str,

    /// Human-readable warning message.
    pub message: String,

    /// Dotted path of the key the warning is about.
    pub path: String,
}

impl std::fmt::Display for AdvisoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Outcome of taking in one settings document.
#[derive(Debug)]
pub struct IntakeReport {
    /// Effective options, legacy keys already resolved.
    pub options: Options,

    /// Unused and deprecated keys.
    pub warnings: Vec<AdvisoryWarning>,

    /// First validation failure, if any.
    pub validation_error: Option<ValidationError>,
}

impl IntakeReport {
    /// Whether the effective options passed validation.
    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none()
    }
}

/// Decode, resolve and validate a client settings document.
pub fn intake(input: Value) -> Result<IntakeReport, IntakeError> {
    let decoded = decode_options(input)?;

    let mut warnings: Vec<AdvisoryWarning> = decoded
        .unused_keys
        .into_iter()
        .map(|key| AdvisoryWarning {
            code: "settings.key.unused",
            message: "Unknown setting ignored".into(),
            path: key,
        })
        .collect();

    let resolved = resolve_legacy(decoded.options);
    warnings.extend(resolved.notices.iter().map(|notice| AdvisoryWarning {
        code: "settings.key.deprecated",
        message: notice.to_string(),
        path: notice.key.to_string(),
    }));

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let validation_error = validate(&resolved.options).err();
    if let Some(err) = &validation_error {
        tracing::warn!(code = err.code(), "Settings failed validation: {}", err);
    }

    Ok(IntakeReport {
        options: resolved.options,
        warnings,
        validation_error,
    })
}
