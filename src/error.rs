//! Error types for manifest validation.

use thiserror::Error;

/// Errors produced while validating a manifest against its media type.
///
/// Every failure is terminal for the call: the first stage that fails
/// (input read, semantic rule, schema compilation, schema check) produces
/// exactly one error and nothing after it runs.
#[derive(Debug, Error)]
pub enum ValidateError {
    // IO errors (exit code 3)
    #[error("failed to read input: {source}")]
    ReadInput {
        #[source]
        source: std::io::Error,
    },

    // User input errors (exit code 1)
    #[error("unable to parse json to validate: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("config format mismatch: {source}")]
    ConfigFormat {
        #[source]
        source: serde_json::Error,
    },

    #[error("model descriptor must have either name or family")]
    DescriptorIdentity,

    #[error("modelfs.type must be 'layers', got {value:?}")]
    ModelFsType { value: String },

    #[error("modelfs.diffIds must not be empty")]
    EmptyDiffIds,

    #[error("invalid input modality: {modality:?}")]
    InvalidInputModality { modality: String },

    #[error("invalid output modality: {modality:?}")]
    InvalidOutputModality { modality: String },

    #[error("validation failed: {message}")]
    SchemaValidation {
        /// JSON Pointer (RFC 6901) to the offending part of the instance.
        path: String,
        message: String,
    },

    // Packaging and dispatch errors (exit code 2)
    #[error("no validator available for {media_type}")]
    NoValidator { media_type: String },

    #[error("failed to compile schema {media_type}: {message}")]
    CompileSchema { media_type: String, message: String },

    #[error("internal error: schema resource not found: {name}")]
    ResourceNotFound { name: String },

    #[error("internal error: schema resource has no aliases: {name}")]
    NoAliases { name: String },

    #[error("internal error: could not parse schema resource {name}: {message}")]
    BadResource { name: String, message: String },
}

impl ValidateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReadInput { .. } => 3,
            Self::NoValidator { .. }
            | Self::CompileSchema { .. }
            | Self::ResourceNotFound { .. }
            | Self::NoAliases { .. }
            | Self::BadResource { .. } => 2,
            Self::InvalidJson { .. }
            | Self::ConfigFormat { .. }
            | Self::DescriptorIdentity
            | Self::ModelFsType { .. }
            | Self::EmptyDiffIds
            | Self::InvalidInputModality { .. }
            | Self::InvalidOutputModality { .. }
            | Self::SchemaValidation { .. } => 1,
        }
    }

    /// True for errors that indicate a packaging defect in the bundled
    /// schema set rather than a problem with the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound { .. } | Self::NoAliases { .. } | Self::BadResource { .. }
        )
    }
}
