//! The generation pipeline: validate → invoke → normalize, strictly in order.

pub mod invoker;
pub mod normalize;
pub mod request;

pub use invoker::{GenerationInvoker, SYSTEM_PROMPT};
pub use normalize::{ManifestNormalizer, content_hash};
pub use request::RequestValidator;

use crate::error::{GenerationError, SchemaError};
use crate::schema::{GenerationManifest, GenerationRequest};
use serde_json::Value;

/// Stateless request handler shared by every connection. Holds only
/// immutable data, so concurrent calls never interact.
pub struct Pipeline {
    validator: RequestValidator,
    invoker: GenerationInvoker,
    normalizer: ManifestNormalizer,
}

impl Pipeline {
    pub fn new(invoker: GenerationInvoker) -> Result<Self, SchemaError> {
        Ok(Self {
            validator: RequestValidator::new()?,
            invoker,
            normalizer: ManifestNormalizer::new()?,
        })
    }

    pub fn model(&self) -> &str {
        self.invoker.model()
    }

    pub fn validate(&self, payload: &Value) -> Result<GenerationRequest, GenerationError> {
        self.validator
            .validate(payload)
            .map_err(GenerationError::RequestInvalid)
    }

    /// Validation completes before any network call; no partial manifest is
    /// ever produced.
    pub async fn generate(&self, payload: &Value) -> Result<GenerationManifest, GenerationError> {
        let request = self.validate(payload)?;
        let raw = self.invoker.invoke(&request).await?;
        let manifest = self.normalizer.normalize(&raw)?;

        tracing::info!(
            idea = %request.idea.id,
            project = %manifest.project_name,
            files = manifest.files.len(),
            "generated agent manifest"
        );
        Ok(manifest)
    }
}
