use crate::error::SchemaError;
use crate::schema::{
    CompiledSchema, GenerationRequest, REQUEST_SCHEMA_NAME, Violation, Violations, request_schema,
};
use serde_json::Value;

/// Validates untyped `POST /generate` bodies into [`GenerationRequest`]s.
#[derive(Debug)]
pub struct RequestValidator {
    schema: CompiledSchema,
}

impl RequestValidator {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            schema: CompiledSchema::compile(REQUEST_SCHEMA_NAME, request_schema())?,
        })
    }

    /// Runs every check to completion and reports all violations together.
    pub fn validate(&self, payload: &Value) -> Result<GenerationRequest, Violations> {
        let mut violations = self.schema.check(payload);
        violations.extend(check_prior_artifacts(payload));
        let violations = violations.finish();

        if !violations.is_empty() {
            return Err(violations);
        }

        serde_json::from_value(payload.clone())
            .map_err(|error| Violations::from(vec![Violation::root(error.to_string())]))
    }
}

fn check_prior_artifacts(payload: &Value) -> Violations {
    let Some(artifacts) = payload
        .pointer("/context/priorArtifacts")
        .and_then(Value::as_array)
    else {
        return Violations::new();
    };

    artifacts
        .iter()
        .enumerate()
        .filter_map(|(index, artifact)| {
            let raw = artifact.as_str()?;
            match url::Url::parse(raw) {
                Ok(_) => None,
                Err(error) => Some(Violation::new(
                    format!("context.priorArtifacts.{index}"),
                    format!("invalid url: {error}"),
                )),
            }
        })
        .collect()
}
