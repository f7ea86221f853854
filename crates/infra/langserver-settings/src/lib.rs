//! Settings intake for the Terraform language server.
//!
//! This crate provides:
//! - [`Options`]: The typed settings a client sends as initialization options
//! - [`decode_options`]: Untyped document to typed options, collecting unused keys
//! - [`validate`]: Semantic checks (binary path, ignored directory names)
//! - [`legacy`]: Folding of deprecated flat keys into their nested replacements
//! - [`intake()`]: The three steps above as one call with advisory warnings
//! - [`schema`]: JSON Schema generation for editor completion
//!
//! # Example
//! ```no_run
//! use langserver_settings::{decode_options, validate};
//! use serde_json::json;
//!
//! let decoded = decode_options(json!({
//!     "terraform": {"path": "/bin/true"},
//!     "bogus": 1
//! }))
//! .unwrap();
//!
//! for key in &decoded.unused_keys {
//!     eprintln!("Unknown setting: {}", key);
//! }
//! validate(&decoded.options).unwrap();
//! ```
//!
//! Nothing here reads files or environment variables; the document is handed
//! over by the transport layer.

pub mod decode;
pub mod error;
pub mod intake;
pub mod legacy;
pub mod schema;
pub mod types;
pub mod validation;

// Re-exports for convenient access
pub use decode::{DecodedOptions, decode_options};
pub use error::{DecodeError, IntakeError, ValidationError};
pub use intake::{AdvisoryWarning, IntakeReport, intake};
pub use legacy::{LegacyNotice, LegacyResolution, resolve_legacy};
pub use types::{ExperimentalFeatures, Indexing, Options, Terraform};
pub use validation::{DATA_DIR_NAME, validate};
