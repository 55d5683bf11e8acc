//! Media-type dispatch over input streams.

use std::io::Read;

use serde_json::Value;

use crate::compiler;
use crate::error::ValidateError;
use crate::semantic;
use crate::store;

/// Validates input streams against the rules for one media type.
///
/// Each call is self-contained: the schema set is compiled fresh and no
/// state survives between calls, so a `Validator` is safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct Validator {
    media_type: String,
}

impl Validator {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Validate the given reader against this media type.
    ///
    /// Runs the semantic check first when one is registered, then the
    /// compiled-schema check; the first failure is returned unchanged.
    pub fn validate<R: Read>(&self, mut src: R) -> Result<(), ValidateError> {
        if let Some(check) = semantic::check_for(&self.media_type) {
            // buffer the input so the semantic check and the schema check
            // both see the same bytes
            let mut buf = Vec::new();
            src.read_to_end(&mut buf)
                .map_err(|source| ValidateError::ReadInput { source })?;
            check(&buf)?;
            return self.validate_schema(&buf[..]);
        }

        self.validate_schema(src)
    }

    fn validate_schema<R: Read>(&self, src: R) -> Result<(), ValidateError> {
        let Some(root_id) = store::schema_id(&self.media_type) else {
            return Err(ValidateError::NoValidator {
                media_type: self.media_type.clone(),
            });
        };

        let schema = compiler::compile(&self.media_type, root_id)?;

        let input: Value = serde_json::from_reader(src)
            .map_err(|source| ValidateError::InvalidJson { source })?;

        schema
            .validate(&input)
            .map_err(|err| ValidateError::SchemaValidation {
                path: err.instance_path.to_string(),
                message: err.to_string(),
            })
    }
}

/// Validate a reader against the rules for `media_type`.
pub fn validate(media_type: &str, src: impl Read) -> Result<(), ValidateError> {
    Validator::new(media_type).validate(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_media_type() {
        let err = validate("application/x-unknown", &b"{}"[..]).unwrap_err();
        assert!(matches!(err, ValidateError::NoValidator { .. }));
        assert_eq!(
            err.to_string(),
            "no validator available for application/x-unknown"
        );
    }

    #[test]
    fn read_failure_is_reported() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
            }
        }

        let err = validate(store::MEDIA_TYPE_MODEL_CONFIG, Broken).unwrap_err();
        assert!(matches!(err, ValidateError::ReadInput { .. }));
    }

    #[test]
    fn media_type_accessor() {
        let v = Validator::new(store::MEDIA_TYPE_MODEL_CONFIG);
        assert_eq!(v.media_type(), store::MEDIA_TYPE_MODEL_CONFIG);
    }
}
