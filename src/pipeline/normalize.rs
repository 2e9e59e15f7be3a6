use crate::error::{GenerationError, SchemaError};
use crate::schema::{
    CompiledSchema, DraftFile, DraftManifest, GeneratedFile, GenerationManifest,
    POST_PARSE_SCHEMA_NAME, Violation, Violations, post_parse_schema,
};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the UTF-8 bytes of `contents`.
pub fn content_hash(contents: &str) -> String {
    hex::encode(Sha256::digest(contents.as_bytes()))
}

/// Parses, re-validates, and hashes the backend's raw reply.
#[derive(Debug)]
pub struct ManifestNormalizer {
    schema: CompiledSchema,
}

impl ManifestNormalizer {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            schema: CompiledSchema::compile(POST_PARSE_SCHEMA_NAME, post_parse_schema())?,
        })
    }

    pub fn normalize(&self, raw: &str) -> Result<GenerationManifest, GenerationError> {
        let parsed: Value = serde_json::from_str(raw)
            .map_err(|error| GenerationError::MalformedPayload(error.to_string()))?;

        let violations = self.schema.check(&parsed);
        if !violations.is_empty() {
            return Err(GenerationError::SchemaViolation(violations));
        }

        let draft: DraftManifest = serde_json::from_value(parsed).map_err(|error| {
            GenerationError::SchemaViolation(Violations::from(vec![Violation::root(
                error.to_string(),
            )]))
        })?;

        Ok(finalize(draft))
    }
}

/// Fill in missing hashes. Supplied hashes are kept as-is, never verified.
fn finalize(draft: DraftManifest) -> GenerationManifest {
    GenerationManifest {
        project_name: draft.project_name,
        summary: draft.summary,
        files: draft.files.into_iter().map(hash_file).collect(),
        env: draft.env,
        next_actions: draft.next_actions,
    }
}

fn hash_file(file: DraftFile) -> GeneratedFile {
    let hash = file.hash.unwrap_or_else(|| content_hash(&file.contents));
    GeneratedFile {
        path: file.path,
        contents: file.contents,
        description: file.description,
        hash,
    }
}
