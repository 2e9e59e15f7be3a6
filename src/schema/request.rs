//! Inbound request shapes: the agent idea, its context, and the plan.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const REQUEST_SCHEMA_NAME: &str = "generate_request";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentIdea {
    pub id: String,
    pub title: String,
    pub problem: String,
    pub persona: String,
    pub success_criteria: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationContext {
    pub prior_artifacts: Vec<String>,
    pub notes: String,
    /// Opaque fields carried over from an upstream record system.
    #[serde(rename = "airtableRecord", skip_serializing_if = "Option::is_none")]
    pub external_record: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationPlan {
    pub summary: String,
    pub implementation_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance: Option<String>,
    #[serde(default)]
    pub risk_register: Vec<String>,
}

/// One validated generation request. Constructed per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub idea: AgentIdea,
    pub context: GenerationContext,
    pub plan: ImplementationPlan,
}

fn non_empty_string() -> Value {
    json!({"type": "string", "minLength": 1})
}

fn string_list() -> Value {
    json!({"type": "array", "items": {"type": "string"}})
}

fn non_empty_string_list() -> Value {
    json!({"type": "array", "minItems": 1, "items": {"type": "string"}})
}

/// JSON Schema for the `POST /generate` body.
///
/// Unknown keys are tolerated and dropped during typed decoding. URL
/// well-formedness of `context.priorArtifacts` is checked by the request
/// validator, not here.
pub fn request_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": REQUEST_SCHEMA_NAME,
        "type": "object",
        "required": ["idea", "context", "plan"],
        "properties": {
            "idea": {
                "type": "object",
                "required": ["id", "title", "problem", "persona", "successCriteria"],
                "properties": {
                    "id": non_empty_string(),
                    "title": non_empty_string(),
                    "problem": non_empty_string(),
                    "persona": non_empty_string(),
                    "successCriteria": non_empty_string_list(),
                    "stack": string_list(),
                    "channels": string_list(),
                    "value": {"type": "string"}
                }
            },
            "context": {
                "type": "object",
                "properties": {
                    "priorArtifacts": string_list(),
                    "notes": {"type": "string"},
                    "airtableRecord": {"type": "object"}
                }
            },
            "plan": {
                "type": "object",
                "required": ["summary", "implementationSteps"],
                "properties": {
                    "summary": non_empty_string(),
                    "implementationSteps": non_empty_string_list(),
                    "governance": {"type": "string"},
                    "riskRegister": string_list()
                }
            }
        }
    })
}
