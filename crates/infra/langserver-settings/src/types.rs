//! Settings types for the language server.
//!
//! The root type is [`Options`]. Every field declares the exact key it binds
//! to in the client document, so Rust names and wire names evolve
//! independently. All structs use `#[serde(default)]`: a missing key keeps the
//! field's zero value.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Root settings document sent by the client as initialization options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Prefix applied to commands the server exposes to the client.
    #[serde(rename = "commandPrefix")]
    pub command_prefix: String,

    /// Which filesystem entries the indexer skips.
    #[serde(rename = "indexing")]
    pub indexing: Indexing,

    /// Experimental features users can opt into.
    #[serde(rename = "experimentalFeatures")]
    pub experimental_features: ExperimentalFeatures,

    /// Suppress the warning shown when a single file is opened outside a workspace.
    #[serde(rename = "ignoreSingleFileWarning")]
    pub ignore_single_file_warning: bool,

    /// Configuration of the Terraform binary the server shells out to.
    #[serde(rename = "terraform")]
    pub terraform: Terraform,

    /// Deprecated, has no replacement.
    #[serde(rename = "rootModulePaths", deserialize_with = "null_items_as_default")]
    #[schemars(with = "Vec<String>")]
    pub legacy_root_module_paths: Vec<String>,

    /// Deprecated in favour of `indexing.ignorePaths`.
    #[serde(rename = "excludeModulePaths", deserialize_with = "null_items_as_default")]
    #[schemars(with = "Vec<String>")]
    pub legacy_exclude_module_paths: Vec<String>,

    /// Deprecated in favour of `indexing.ignoreDirectoryNames`.
    #[serde(rename = "ignoreDirectoryNames", deserialize_with = "null_items_as_default")]
    #[schemars(with = "Vec<String>")]
    pub legacy_ignore_directory_names: Vec<String>,

    /// Deprecated in favour of `terraform.path`.
    #[serde(rename = "terraformExecPath")]
    pub legacy_terraform_exec_path: String,

    /// Deprecated in favour of `terraform.timeout`.
    #[serde(rename = "terraformExecTimeout")]
    pub legacy_terraform_exec_timeout: String,

    /// Deprecated in favour of `terraform.logFilePath`.
    #[serde(rename = "terraformExecLogFilePath")]
    pub legacy_terraform_exec_log_file_path: String,
}

/// Indexing exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Indexing {
    /// Bare directory names (not paths) skipped wherever they appear.
    #[serde(rename = "ignoreDirectoryNames", deserialize_with = "null_items_as_default")]
    #[schemars(with = "Vec<String>")]
    pub ignore_directory_names: Vec<String>,

    /// Paths skipped by the indexer.
    #[serde(rename = "ignorePaths", deserialize_with = "null_items_as_default")]
    #[schemars(with = "Vec<String>")]
    pub ignore_paths: Vec<String>,
}

/// Named boolean toggles. Adding a feature only requires a new field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExperimentalFeatures {
    #[serde(rename = "validateOnSave")]
    pub validate_on_save: bool,

    #[serde(rename = "prefillRequiredFields")]
    pub prefill_required_fields: bool,
}

/// Terraform binary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Terraform {
    /// Absolute path to the executable. Empty means not configured.
    #[serde(rename = "path")]
    pub path: String,

    /// Execution timeout as a duration string. Not interpreted here.
    #[serde(rename = "timeout")]
    pub timeout: String,

    /// File the binary's log output is written to.
    #[serde(rename = "logFilePath")]
    pub log_file_path: String,
}

/// Decode a list whose `null` elements take the element type's zero value.
fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

impl Options {
    /// Whether any legacy top-level key carries a value.
    pub fn has_legacy_values(&self) -> bool {
        !self.legacy_root_module_paths.is_empty()
            || !self.legacy_exclude_module_paths.is_empty()
            || !self.legacy_ignore_directory_names.is_empty()
            || !self.legacy_terraform_exec_path.is_empty()
            || !self.legacy_terraform_exec_timeout.is_empty()
            || !self.legacy_terraform_exec_log_file_path.is_empty()
    }
}
