//! Embedded schema resource store.
//!
//! The schema documents ship inside the binary via `include_str!`. Each one
//! is addressable by its short file name and by the canonical URLs in
//! [`aliases`], so cross-schema `$ref`s may use either form. The alias table
//! and the media-type table below must stay in sync with `schemas/`; a
//! resource without an alias entry aborts compilation rather than being
//! skipped.

use crate::error::ValidateError;

/// Media type of the model configuration document.
pub const MEDIA_TYPE_MODEL_CONFIG: &str = "application/vnd.cncf.model.config.v1+json";

/// Canonical URL of the model configuration schema.
pub const CONFIG_SCHEMA_URL: &str = "https://modelpack.cncf.io/schema/config-schema.json";

const DEFS_URL: &str = "https://modelpack.cncf.io/schema/defs.json";
const DEFS_V1_URL: &str = "https://modelpack.cncf.io/schema/v1/defs.json";

const RESOURCES: &[(&str, &str)] = &[
    (
        "config-schema.json",
        include_str!("../schemas/config-schema.json"),
    ),
    ("defs.json", include_str!("../schemas/defs.json")),
];

/// Names of the bundled schema resources. Iteration order is not significant.
pub fn resource_names() -> impl Iterator<Item = &'static str> {
    RESOURCES.iter().map(|(name, _)| *name)
}

/// Read a bundled schema resource by file name.
pub fn read_resource(name: &str) -> Result<&'static str, ValidateError> {
    RESOURCES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, text)| *text)
        .ok_or_else(|| ValidateError::ResourceNotFound {
            name: name.to_string(),
        })
}

/// Canonical URL aliases for a bundled resource. Empty for unknown names,
/// which the compiler treats as a packaging bug.
pub fn aliases(name: &str) -> &'static [&'static str] {
    match name {
        "config-schema.json" => &[CONFIG_SCHEMA_URL],
        "defs.json" => &[DEFS_URL, DEFS_V1_URL],
        _ => &[],
    }
}

/// Root schema identifier for a media type, or `None` if the media type has
/// no registered schema.
pub fn schema_id(media_type: &str) -> Option<&'static str> {
    match media_type {
        MEDIA_TYPE_MODEL_CONFIG => Some(CONFIG_SCHEMA_URL),
        _ => None,
    }
}

/// Media types this crate can validate.
pub fn supported_media_types() -> &'static [&'static str] {
    &[MEDIA_TYPE_MODEL_CONFIG]
}
