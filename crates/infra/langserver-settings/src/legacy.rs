//! Resolution of deprecated top-level keys onto their nested replacements.
//!
//! Older clients send flat keys such as `terraformExecPath`. The decoder keeps
//! them verbatim in the `legacy_*` fields of [`Options`]; this module decides,
//! per concern, which value is in effect:
//! - the modern key wins when both are set
//! - the legacy value is used when only it is set
//!
//! Resolved options have every legacy field cleared, so exactly one naming
//! scheme is authoritative downstream.

use crate::types::Options;

/// Notice about one legacy key present in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyNotice {
    /// The deprecated key as sent by the client.
    pub key: &'static str,

    /// The key that replaces it, if any.
    pub replacement: Option<&'static str>,

    /// Whether the legacy value was copied into the modern field.
    pub applied: bool,
}

impl std::fmt::Display for LegacyNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.replacement, self.applied) {
            (None, _) => write!(f, "{} is deprecated and has no effect", self.key),
            (Some(new), true) => write!(f, "{} is deprecated, use {} instead", self.key, new),
            (Some(new), false) => write!(
                f,
                "{} is deprecated and ignored because {} is set",
                self.key, new
            ),
        }
    }
}

/// Options with legacy keys folded in, plus what happened to each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyResolution {
    pub options: Options,
    pub notices: Vec<LegacyNotice>,
}

/// Fold legacy keys into their modern counterparts.
pub fn resolve_legacy(mut options: Options) -> LegacyResolution {
    let mut notices = vec![];

    if !std::mem::take(&mut options.legacy_root_module_paths).is_empty() {
        notices.push(LegacyNotice {
            key: "rootModulePaths",
            replacement: None,
            applied: false,
        });
    }

    fold(
        &mut options.indexing.ignore_paths,
        std::mem::take(&mut options.legacy_exclude_module_paths),
        "excludeModulePaths",
        "indexing.ignorePaths",
        &mut notices,
    );
    fold(
        &mut options.indexing.ignore_directory_names,
        std::mem::take(&mut options.legacy_ignore_directory_names),
        "ignoreDirectoryNames",
        "indexing.ignoreDirectoryNames",
        &mut notices,
    );
    fold(
        &mut options.terraform.path,
        std::mem::take(&mut options.legacy_terraform_exec_path),
        "terraformExecPath",
        "terraform.path",
        &mut notices,
    );
    fold(
        &mut options.terraform.timeout,
        std::mem::take(&mut options.legacy_terraform_exec_timeout),
        "terraformExecTimeout",
        "terraform.timeout",
        &mut notices,
    );
    fold(
        &mut options.terraform.log_file_path,
        std::mem::take(&mut options.legacy_terraform_exec_log_file_path),
        "terraformExecLogFilePath",
        "terraform.logFilePath",
        &mut notices,
    );

    LegacyResolution { options, notices }
}

/// Values that are "unset" when empty.
trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Unset for Vec<T> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

fn fold<T: Unset>(
    modern: &mut T,
    legacy: T,
    key: &'static str,
    replacement: &'static str,
    notices: &mut Vec<LegacyNotice>,
) {
    if legacy.is_unset() {
        return;
    }

    let applied = modern.is_unset();
    if applied {
        *modern = legacy;
    }

    notices.push(LegacyNotice {
        key,
        replacement: Some(replacement),
        applied,
    });
}
