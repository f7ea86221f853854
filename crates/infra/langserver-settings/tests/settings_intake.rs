#![cfg(test)]

use langserver_settings::{
    DATA_DIR_NAME, DecodeError, Options, ValidationError, decode_options, intake, validate,
};
use serde_json::json;
use tempfile::TempDir;

// Per-module behaviour is covered by the unit tests in src/*.rs; these tests
// exercise the public API the way the server's initialize handler does.

#[test]
fn test_decode_then_validate_with_existing_binary() {
    let temp = TempDir::new().unwrap();
    let binary = temp.path().join("terraform");
    std::fs::write(&binary, b"#!/bin/sh\nexit 0\n").unwrap();
    let binary = binary.to_str().unwrap();

    let decoded = decode_options(json!({
        "terraform": {"path": binary},
        "bogus": 1
    }))
    .unwrap();

    assert_eq!(decoded.options.terraform.path, binary);
    assert_eq!(decoded.unused_keys, vec!["bogus"]);
    assert!(validate(&decoded.options).is_ok());
}

#[cfg(unix)]
#[test]
fn test_decode_then_validate_with_system_true() {
    if !std::path::Path::new("/bin/true").exists() {
        return;
    }

    let decoded = decode_options(json!({
        "terraform": {"path": "/bin/true"},
        "bogus": 1
    }))
    .unwrap();

    assert_eq!(decoded.options.terraform.path, "/bin/true");
    assert_eq!(decoded.unused_keys, vec!["bogus"]);
    assert!(validate(&decoded.options).is_ok());
}

#[cfg(unix)]
#[test]
fn test_system_directory_is_not_a_binary() {
    let mut options = Options::default();
    options.terraform.path = "/usr/bin".into();
    assert!(matches!(
        validate(&options),
        Err(ValidationError::NotABinary { .. })
    ));
}

#[test]
fn test_wrong_kind_produces_no_options() {
    let result = decode_options(json!({
        "commandPrefix": "tf",
        "ignoreSingleFileWarning": "yes"
    }));

    match result {
        Err(DecodeError { key, .. }) => assert_eq!(key, "ignoreSingleFileWarning"),
        Ok(decoded) => panic!("Expected decode error, got {decoded:?}"),
    }
}

#[test]
fn test_unconfigured_path_ignores_other_fields() {
    let decoded = decode_options(json!({
        "commandPrefix": "anything",
        "terraform": {"timeout": "not a duration", "logFilePath": "relative.log"},
        "experimentalFeatures": {"validateOnSave": true}
    }))
    .unwrap();

    assert!(validate(&decoded.options).is_ok());
}

#[test]
fn test_reserved_directory_rejected_end_to_end() {
    let decoded = decode_options(json!({
        "indexing": {"ignoreDirectoryNames": ["node_modules", DATA_DIR_NAME]}
    }))
    .unwrap();

    let err = validate(&decoded.options).unwrap_err();
    assert!(matches!(err, ValidationError::ReservedNameIgnored { .. }));
    assert_eq!(err.to_string(), "cannot ignore directory \".terraform\"");
}

#[cfg(unix)]
#[test]
fn test_intake_reports_everything_at_once() {
    let report = intake(json!({
        "excludeModulePaths": ["/work/vendor"],
        "indexing": {"ignoreDirectoryNames": ["foo/bar"]},
        "typo": true
    }))
    .unwrap();

    assert_eq!(report.options.indexing.ignore_paths, vec!["/work/vendor"]);

    let codes: Vec<_> = report.warnings.iter().map(|w| w.code).collect();
    assert_eq!(codes, vec!["settings.key.unused", "settings.key.deprecated"]);

    assert!(matches!(
        report.validation_error,
        Some(ValidationError::ExpectedNameGotPath { ref name }) if name == "foo/bar"
    ));
}

#[test]
fn test_validation_is_idempotent() {
    let mut options = Options::default();
    options.terraform.path = "relative/tf".into();

    let first = validate(&options).unwrap_err().to_string();
    let second = validate(&options).unwrap_err().to_string();
    assert_eq!(first, second);
}
