//! Manifest shapes: what the model is asked to return, what we accept back,
//! and what we hand to callers.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Name attached to the model-facing schema in the response-format constraint.
pub const MANIFEST_SCHEMA_NAME: &str = "agent_factory_manifest";
pub const POST_PARSE_SCHEMA_NAME: &str = "agent_factory_manifest_post_parse";

/// A file entry as decoded from the model's reply. `hash` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFile {
    pub path: String,
    pub contents: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// The model's reply after post-parse validation, before hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftManifest {
    pub project_name: String,
    pub summary: String,
    pub files: Vec<DraftFile>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub next_actions: Vec<String>,
}

/// A generated file as returned to callers; always carries a content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub contents: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationManifest {
    pub project_name: String,
    pub summary: String,
    pub files: Vec<GeneratedFile>,
    pub env: BTreeMap<String, String>,
    pub next_actions: Vec<String>,
}

/// Closed schema sent to the backend as the response-format constraint.
///
/// Descriptions steer generation; `hash` is deliberately absent since the
/// model has no business computing it.
pub fn model_output_schema() -> Value {
    json!({
        "type": "object",
        "required": ["projectName", "summary", "files"],
        "additionalProperties": false,
        "properties": {
            "projectName": {
                "type": "string",
                "description": "Slugified project identifier (kebab-case)."
            },
            "summary": {
                "type": "string",
                "description": "One paragraph summary of the agent design."
            },
            "files": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "required": ["path", "contents"],
                    "additionalProperties": false,
                    "properties": {
                        "path": {
                            "type": "string",
                            "description": "Path of the file relative to the repo root."
                        },
                        "contents": {
                            "type": "string",
                            "description": "File contents encoded as UTF-8 text."
                        },
                        "description": {
                            "type": "string",
                            "description": "Short rationale for the file."
                        }
                    }
                }
            },
            "env": {
                "type": "object",
                "additionalProperties": {"type": "string"},
                "description": "Environment variables required for the agent runtime."
            },
            "nextActions": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Optional checklist of follow-up actions."
            }
        }
    })
}

/// Schema applied locally to the parsed reply.
///
/// Stricter than the model-facing one on emptiness, looser on extra keys
/// (dropped on decode) and on a per-file `hash`.
pub fn post_parse_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": POST_PARSE_SCHEMA_NAME,
        "type": "object",
        "required": ["projectName", "summary", "files"],
        "properties": {
            "projectName": {"type": "string", "minLength": 1},
            "summary": {"type": "string", "minLength": 1},
            "files": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "required": ["path", "contents"],
                    "properties": {
                        "path": {"type": "string", "minLength": 1},
                        "contents": {"type": "string"},
                        "description": {"type": "string"},
                        "hash": {"type": "string"}
                    }
                }
            },
            "env": {
                "type": "object",
                "additionalProperties": {"type": "string"}
            },
            "nextActions": {
                "type": "array",
                "items": {"type": "string"}
            }
        }
    })
}
