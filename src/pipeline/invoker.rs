use crate::error::GenerationError;
use crate::llm::{ResponseFormat, StructuredBackend, StructuredRequest};
use crate::schema::GenerationRequest;
use std::sync::Arc;

/// Fixed instructions describing the scaffolding the model should produce.
pub const SYSTEM_PROMPT: &str = "\
You are an orchestration layer that produces production-ready agent boilerplate.
Return concise scaffolding that is instantly committable to git.
Honor the provided implementation steps and align dependencies with the declared stack.
Always include:
- README.md with architecture, env var instructions, and deployment steps.
- docker/ or container instructions when deployment hints are provided.
- src/ directory with entry point.
Favor TypeScript + Docker + n8n integrations when applicable.
";

/// Issues exactly one schema-constrained call per validated request.
pub struct GenerationInvoker {
    backend: Arc<dyn StructuredBackend>,
    format: ResponseFormat,
    model: String,
    reasoning_effort: Option<String>,
    system_prompt: String,
}

impl GenerationInvoker {
    pub fn new(
        backend: Arc<dyn StructuredBackend>,
        format: ResponseFormat,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            format,
            model: model.into(),
            reasoning_effort: None,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_reasoning_effort(mut self, effort: Option<String>) -> Self {
        self.reasoning_effort = effort.filter(|effort| !effort.trim().is_empty());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Canonical user-turn text: pretty JSON in declaration order with
    /// defaults materialised.
    pub fn render_input(request: &GenerationRequest) -> Result<String, GenerationError> {
        serde_json::to_string_pretty(request).map_err(|error| {
            GenerationError::BackendError(format!("failed to serialize request: {error}"))
        })
    }

    pub async fn invoke(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let user_message = Self::render_input(request)?;
        let call = StructuredRequest {
            model: &self.model,
            system_prompt: &self.system_prompt,
            user_message: &user_message,
            format: &self.format,
            reasoning_effort: self.reasoning_effort.as_deref(),
        };

        tracing::debug!(
            backend = self.backend.name(),
            model = %self.model,
            idea = %request.idea.id,
            "issuing structured generation call"
        );

        self.backend
            .generate(call)
            .await
            .map_err(GenerationError::from)
    }
}
