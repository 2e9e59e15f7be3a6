use super::violation::{Violation, Violations};
use crate::error::SchemaError;
use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, JSONSchema, ValidationError};
use serde_json::Value;

/// A named JSON Schema compiled into a reusable validator.
///
/// Built once at startup and shared read-only between requests.
pub struct CompiledSchema {
    name: &'static str,
    validator: JSONSchema,
}

impl CompiledSchema {
    pub fn compile(name: &'static str, document: Value) -> Result<Self, SchemaError> {
        let validator = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|error| SchemaError::Compile {
                name,
                message: error.to_string(),
            })?;

        Ok(Self { name, validator })
    }

    /// Validate `instance`, returning every violation found (empty when valid).
    pub fn check(&self, instance: &Value) -> Violations {
        match self.validator.validate(instance) {
            Ok(()) => Violations::new(),
            Err(errors) => errors
                .map(|error| violation_from(&error))
                .collect::<Violations>()
                .finish(),
        }
    }
}

impl std::fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn violation_from(error: &ValidationError<'_>) -> Violation {
    let mut segments = error.instance_path.clone().into_vec();

    let message = match &error.kind {
        // Report a missing property at its own path rather than its parent's.
        ValidationErrorKind::Required { property } => {
            segments.push(
                property
                    .as_str()
                    .map_or_else(|| property.to_string(), ToOwned::to_owned),
            );
            "is required".to_string()
        }
        ValidationErrorKind::MinLength { limit } => {
            format!("must be at least {limit} character(s) long")
        }
        ValidationErrorKind::MinItems { limit } => {
            format!("must contain at least {limit} item(s)")
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => {
            format!("unexpected properties: {}", unexpected.join(", "))
        }
        _ => error.to_string(),
    };

    Violation::new(segments.join("."), message)
}
