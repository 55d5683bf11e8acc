//! Semantic checks that JSON Schema cannot express.
//!
//! Cross-field conditions and code-defined enumerations, keyed by media
//! type. Only media types with rules beyond schema capability appear in
//! [`check_for`]; for everything else schema validation alone is enough.
//! Checks run before schema compilation so structurally nonsensical input
//! is rejected without paying the compilation cost.

use crate::config::{known_architecture, known_modality, Model};
use crate::error::ValidateError;

/// A semantic pre-check over the raw, undecoded manifest bytes.
pub type SemanticCheck = fn(&[u8]) -> Result<(), ValidateError>;

/// Look up the semantic check for a media type. Adding a new media type
/// means adding an arm here, not mutating a table at runtime.
pub fn check_for(media_type: &str) -> Option<SemanticCheck> {
    match media_type {
        crate::store::MEDIA_TYPE_MODEL_CONFIG => Some(validate_model_config),
        _ => None,
    }
}

/// Rules for the model configuration document, applied in order; the first
/// violation wins.
fn validate_model_config(buf: &[u8]) -> Result<(), ValidateError> {
    let model: Model =
        serde_json::from_slice(buf).map_err(|source| ValidateError::ConfigFormat { source })?;

    if model.descriptor.name.is_empty() && model.descriptor.family.is_empty() {
        return Err(ValidateError::DescriptorIdentity);
    }

    if model.model_fs.fs_type != "layers" {
        return Err(ValidateError::ModelFsType {
            value: model.model_fs.fs_type,
        });
    }

    if model.model_fs.diff_ids.is_empty() {
        return Err(ValidateError::EmptyDiffIds);
    }

    if !model.config.architecture.is_empty() && !known_architecture(&model.config.architecture) {
        // custom architectures are accepted as-is
    }

    if let Some(capabilities) = &model.config.capabilities {
        for modality in &capabilities.input_types {
            if !known_modality(modality) {
                return Err(ValidateError::InvalidInputModality {
                    modality: modality.clone(),
                });
            }
        }
        for modality in &capabilities.output_types {
            if !known_modality(modality) {
                return Err(ValidateError::InvalidOutputModality {
                    modality: modality.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MEDIA_TYPE_MODEL_CONFIG;
    use serde_json::json;

    fn check(doc: serde_json::Value) -> Result<(), ValidateError> {
        validate_model_config(doc.to_string().as_bytes())
    }

    fn minimal_config() -> serde_json::Value {
        json!({
            "descriptor": { "name": "bert-base" },
            "modelfs": { "type": "layers", "diffIds": ["sha256:aa"] }
        })
    }

    #[test]
    fn registry_knows_model_config() {
        assert!(check_for(MEDIA_TYPE_MODEL_CONFIG).is_some());
        assert!(check_for("application/vnd.oci.image.config.v1+json").is_none());
    }

    #[test]
    fn minimal_config_passes() {
        assert!(check(minimal_config()).is_ok());
    }

    #[test]
    fn not_json_is_a_format_mismatch() {
        let err = validate_model_config(b"}{").unwrap_err();
        assert!(matches!(err, ValidateError::ConfigFormat { .. }));
        assert!(err.to_string().starts_with("config format mismatch"));
    }

    #[test]
    fn descriptor_needs_name_or_family() {
        let mut doc = minimal_config();
        doc["descriptor"] = json!({ "name": "", "family": "" });
        let err = check(doc).unwrap_err();
        assert!(matches!(err, ValidateError::DescriptorIdentity));

        // either one alone is enough
        let mut doc = minimal_config();
        doc["descriptor"] = json!({ "family": "bert" });
        assert!(check(doc).is_ok());
    }

    #[test]
    fn modelfs_type_must_be_layers() {
        let mut doc = minimal_config();
        doc["modelfs"]["type"] = json!("blobs");
        let err = check(doc).unwrap_err();
        assert!(matches!(err, ValidateError::ModelFsType { ref value } if value == "blobs"));
    }

    #[test]
    fn missing_modelfs_type_rejected_like_wrong_value() {
        let mut doc = minimal_config();
        doc["modelfs"] = json!({ "diffIds": ["sha256:aa"] });
        let err = check(doc).unwrap_err();
        assert!(matches!(err, ValidateError::ModelFsType { ref value } if value.is_empty()));
    }

    #[test]
    fn diff_ids_must_not_be_empty() {
        let mut doc = minimal_config();
        doc["modelfs"]["diffIds"] = json!([]);
        let err = check(doc).unwrap_err();
        assert!(matches!(err, ValidateError::EmptyDiffIds));
    }

    #[test]
    fn rule_order_is_stable() {
        // type and diffIds both violated: the type rule reports first
        let mut doc = minimal_config();
        doc["modelfs"] = json!({ "type": "blobs", "diffIds": [] });
        let err = check(doc).unwrap_err();
        assert!(matches!(err, ValidateError::ModelFsType { .. }));
    }

    #[test]
    fn custom_architecture_is_accepted() {
        let mut doc = minimal_config();
        doc["config"] = json!({ "architecture": "starfleet" });
        assert!(check(doc).is_ok());
    }

    #[test]
    fn unknown_input_modality_rejected() {
        let mut doc = minimal_config();
        doc["config"] = json!({ "capabilities": { "inputTypes": ["text", "smell"] } });
        let err = check(doc).unwrap_err();
        assert!(matches!(
            err,
            ValidateError::InvalidInputModality { ref modality } if modality == "smell"
        ));
    }

    #[test]
    fn unknown_output_modality_rejected() {
        let mut doc = minimal_config();
        doc["config"] = json!({ "capabilities": { "outputTypes": ["telepathy"] } });
        let err = check(doc).unwrap_err();
        assert!(matches!(
            err,
            ValidateError::InvalidOutputModality { ref modality } if modality == "telepathy"
        ));
    }

    #[test]
    fn absent_capabilities_skip_modality_rules() {
        let mut doc = minimal_config();
        doc["config"] = json!({ "architecture": "transformer" });
        assert!(check(doc).is_ok());
    }
}
