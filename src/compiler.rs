//! Schema compilation over the embedded resource store.
//!
//! Every bundled resource is registered under its file name and under each
//! of its canonical URL aliases, so `$ref`s inside the schemas resolve no
//! matter which identifier they use. Compilation happens fresh on every
//! call; the embedded set is small and this keeps the compiler free of
//! shared state.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::error::ValidateError;
use crate::store;

/// Serves schema documents to the `jsonschema` reference resolver from an
/// in-memory map keyed by file name and alias URL.
struct StoreRetriever {
    documents: HashMap<String, Value>,
}

impl jsonschema::Retrieve for StoreRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        self.documents
            .get(uri.as_str())
            .cloned()
            .ok_or_else(|| format!("schema resource not registered: {uri}").into())
    }
}

/// Compile the schema identified by `root_id` against the full embedded
/// resource graph. `media_type` is only used for error context.
pub fn compile(media_type: &str, root_id: &str) -> Result<jsonschema::Validator, ValidateError> {
    let mut documents = HashMap::new();
    for name in store::resource_names() {
        let text = store::read_resource(name)?;
        register_resource(&mut documents, name, text, store::aliases(name))?;
    }

    jsonschema::options()
        .with_retriever(StoreRetriever { documents })
        .build(&json!({ "$ref": root_id }))
        .map_err(|source| ValidateError::CompileSchema {
            media_type: media_type.to_string(),
            message: source.to_string(),
        })
}

/// Parse one resource and insert it under its file name and every alias.
/// An empty alias set is a packaging bug: a shipped schema unreachable by
/// canonical URL would break cross-schema `$ref` resolution.
fn register_resource(
    documents: &mut HashMap<String, Value>,
    name: &str,
    text: &str,
    aliases: &[&str],
) -> Result<(), ValidateError> {
    let document: Value =
        serde_json::from_str(text).map_err(|source| ValidateError::BadResource {
            name: name.to_string(),
            message: source.to_string(),
        })?;

    documents.insert(name.to_string(), document.clone());

    if aliases.is_empty() {
        return Err(ValidateError::NoAliases {
            name: name.to_string(),
        });
    }
    for alias in aliases {
        documents.insert((*alias).to_string(), document.clone());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_model_config_schema() {
        let schema = compile(store::MEDIA_TYPE_MODEL_CONFIG, store::CONFIG_SCHEMA_URL).unwrap();

        let valid = json!({
            "descriptor": { "name": "m" },
            "modelfs": { "type": "layers", "diffIds": ["sha256:aa"] }
        });
        assert!(schema.validate(&valid).is_ok());

        // descriptor and modelfs are required
        let invalid = json!({ "descriptor": { "name": "m" } });
        assert!(schema.validate(&invalid).is_err());
    }

    #[test]
    fn compile_resolves_cross_schema_refs() {
        // diffIds entries reference the digest definition in defs.json,
        // reached through the alias table
        let schema = compile(store::MEDIA_TYPE_MODEL_CONFIG, store::CONFIG_SCHEMA_URL).unwrap();

        let bad_digest = json!({
            "descriptor": { "name": "m" },
            "modelfs": { "type": "layers", "diffIds": ["not a digest!"] }
        });
        assert!(schema.validate(&bad_digest).is_err());
    }

    #[test]
    fn compile_unknown_root_fails() {
        let err = compile(
            "application/x-test",
            "https://modelpack.cncf.io/schema/missing.json",
        )
        .unwrap_err();
        assert!(matches!(err, ValidateError::CompileSchema { .. }));
    }

    #[test]
    fn register_resource_without_aliases_fails() {
        let mut documents = HashMap::new();
        let err =
            register_resource(&mut documents, "orphan.json", r#"{"type":"object"}"#, &[])
                .unwrap_err();
        assert!(matches!(err, ValidateError::NoAliases { .. }));
        assert!(err.is_internal());
    }

    #[test]
    fn register_resource_registers_all_identifiers() {
        let mut documents = HashMap::new();
        register_resource(
            &mut documents,
            "thing.json",
            r#"{"type":"object"}"#,
            &["https://example.com/thing.json", "https://example.com/v1/thing.json"],
        )
        .unwrap();
        assert_eq!(documents.len(), 3);
        assert!(documents.contains_key("thing.json"));
        assert!(documents.contains_key("https://example.com/thing.json"));
        assert!(documents.contains_key("https://example.com/v1/thing.json"));
    }

    #[test]
    fn register_resource_rejects_malformed_json() {
        let mut documents = HashMap::new();
        let err = register_resource(
            &mut documents,
            "broken.json",
            "not json",
            &["https://example.com/broken.json"],
        )
        .unwrap_err();
        assert!(matches!(err, ValidateError::BadResource { .. }));
        assert!(err.is_internal());
    }
}
