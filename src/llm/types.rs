use crate::schema::{MANIFEST_SCHEMA_NAME, model_output_schema};
use serde_json::Value;

/// Named JSON Schema attached to a request as its response-format constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFormat {
    pub name: String,
    pub schema: Value,
}

impl ResponseFormat {
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// The agent manifest constraint. Build once and share.
    pub fn agent_manifest() -> Self {
        Self::new(MANIFEST_SCHEMA_NAME, model_output_schema())
    }
}

/// Backend-neutral description of one structured-generation call.
#[derive(Debug, Clone, Copy)]
pub struct StructuredRequest<'a> {
    pub model: &'a str,
    pub system_prompt: &'a str,
    pub user_message: &'a str,
    pub format: &'a ResponseFormat,
    pub reasoning_effort: Option<&'a str>,
}
