//! Typed model configuration document.
//!
//! Deserialization target for the semantic checks in [`crate::semantic`].
//! Scalar string fields default to `""` and list fields to `[]` when absent,
//! so the checks test emptiness rather than presence; `capabilities` stays an
//! `Option` because its rules only apply when the object exists at all.

use serde::{Deserialize, Serialize};

/// Known model architectures. Values outside this set are accepted as
/// custom architectures.
pub const ARCHITECTURE_TRANSFORMER: &str = "transformer";
pub const ARCHITECTURE_CNN: &str = "cnn";
pub const ARCHITECTURE_RNN: &str = "rnn";
pub const ARCHITECTURE_LSTM: &str = "lstm";
pub const ARCHITECTURE_GRU: &str = "gru";
pub const ARCHITECTURE_DIFFUSION: &str = "diffusion";
pub const ARCHITECTURE_VAE: &str = "vae";
pub const ARCHITECTURE_GAN: &str = "gan";

/// Known input/output modalities.
pub const MODALITY_TEXT: &str = "text";
pub const MODALITY_IMAGE: &str = "image";
pub const MODALITY_AUDIO: &str = "audio";
pub const MODALITY_VIDEO: &str = "video";
pub const MODALITY_EMBEDDING: &str = "embedding";
pub const MODALITY_OTHER: &str = "other";

/// Whether `value` is one of the known architecture identifiers.
pub fn known_architecture(value: &str) -> bool {
    matches!(
        value,
        ARCHITECTURE_TRANSFORMER
            | ARCHITECTURE_CNN
            | ARCHITECTURE_RNN
            | ARCHITECTURE_LSTM
            | ARCHITECTURE_GRU
            | ARCHITECTURE_DIFFUSION
            | ARCHITECTURE_VAE
            | ARCHITECTURE_GAN
    )
}

/// Whether `value` is one of the known modality identifiers.
pub fn known_modality(value: &str) -> bool {
    matches!(
        value,
        MODALITY_TEXT
            | MODALITY_IMAGE
            | MODALITY_AUDIO
            | MODALITY_VIDEO
            | MODALITY_EMBEDDING
            | MODALITY_OTHER
    )
}

/// Top-level model configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub descriptor: ModelDescriptor,

    #[serde(default, rename = "modelfs")]
    pub model_fs: ModelFs,

    #[serde(default)]
    pub config: ModelConfig,
}

/// Descriptive metadata about the packaged model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub family: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vendor: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_at: String,

    #[serde(default, rename = "docURL", skip_serializing_if = "String::is_empty")]
    pub doc_url: String,

    #[serde(default, rename = "sourceURL", skip_serializing_if = "String::is_empty")]
    pub source_url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Layout of the model artifacts referenced by the package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelFs {
    /// Must be `"layers"`.
    #[serde(default, rename = "type")]
    pub fs_type: String,

    /// Digests of the uncompressed layer contents, in order.
    #[serde(default, rename = "diffIds")]
    pub diff_ids: Vec<String>,
}

/// Runtime-relevant properties of the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub architecture: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param_size: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub precision: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub quantization: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ModelCapabilities>,
}

/// Declared model capabilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCapabilities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_types: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub knowledge_cutoff: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
}
