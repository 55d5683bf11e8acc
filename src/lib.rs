//! Model package manifest validation.
//!
//! Validates model configuration documents against the JSON Schemas bundled
//! with this crate, plus a layer of semantic rules that JSON Schema cannot
//! express (cross-field conditions and code-defined enumerations). A media
//! type string selects both the schema and the semantic rules; the semantic
//! check runs first and the first failure of either stage is reported.
//!
//! # Example
//!
//! ```
//! use modelpack_schema::{Validator, MEDIA_TYPE_MODEL_CONFIG};
//!
//! let manifest = r#"{
//!     "descriptor": { "name": "llama-7b", "family": "llama" },
//!     "modelfs": {
//!         "type": "layers",
//!         "diffIds": ["sha256:8f2e9c1b7a4d5e6f8f2e9c1b7a4d5e6f"]
//!     },
//!     "config": {
//!         "architecture": "transformer",
//!         "capabilities": { "inputTypes": ["text"], "outputTypes": ["text"] }
//!     }
//! }"#;
//!
//! Validator::new(MEDIA_TYPE_MODEL_CONFIG)
//!     .validate(manifest.as_bytes())
//!     .unwrap();
//! ```
//!
//! # Validation stages
//!
//! | Stage | Scope | Failure |
//! |-------|-------|---------|
//! | Semantic check | Typed rules for the media type, if registered | Rule-specific error |
//! | Schema check | Compiled JSON Schema over the decoded document | First constraint violation |
//!
//! The bundled schemas are registered under their file names and canonical
//! URL aliases, so `$ref`s between them resolve with either identifier.

mod compiler;
mod config;
mod error;
mod semantic;
mod store;
mod validator;

pub use config::{
    known_architecture, known_modality, Model, ModelCapabilities, ModelConfig, ModelDescriptor,
    ModelFs,
};
pub use error::ValidateError;
pub use store::{schema_id, supported_media_types, CONFIG_SCHEMA_URL, MEDIA_TYPE_MODEL_CONFIG};
pub use validator::{validate, Validator};
