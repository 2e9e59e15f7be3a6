pub(super) mod types;

use super::http_client::build_backend_client_with_timeout;
use super::scrub::{api_error, sanitize_api_error};
use super::traits::StructuredBackend;
use super::types::StructuredRequest;
use crate::error::LlmError;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use types::{
    InputContent, InputMessage, Reasoning, ResponsesRequest, ResponsesResponse, TextConfig,
    TextFormat,
};

pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const BACKEND_NAME: &str = "OpenAI";

/// Structured generation through the OpenAI Responses API.
pub struct OpenAiBackend {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: String,
    endpoint: String,
    client: Client,
}

impl OpenAiBackend {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Self {
        Self {
            cached_auth_header: format!("Bearer {api_key}"),
            endpoint: format!("{}/responses", base_url.trim_end_matches('/')),
            client: build_backend_client_with_timeout(timeout),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request<'a>(request: &StructuredRequest<'a>) -> ResponsesRequest<'a> {
        ResponsesRequest {
            model: request.model,
            reasoning: request.reasoning_effort.map(|effort| Reasoning { effort }),
            input: vec![
                InputMessage {
                    role: "system",
                    content: vec![InputContent::InputText {
                        text: request.system_prompt,
                    }],
                },
                InputMessage {
                    role: "user",
                    content: vec![InputContent::InputText {
                        text: request.user_message,
                    }],
                },
            ],
            text: TextConfig {
                format: TextFormat {
                    r#type: "json_schema",
                    name: &request.format.name,
                    schema: &request.format.schema,
                },
            },
        }
    }

    /// Prefer the aggregated `output_text`; otherwise join every `output_text`
    /// part of every message item.
    fn extract_text(response: &ResponsesResponse) -> Result<String, LlmError> {
        if let Some(text) = response.output_text.as_deref()
            && !text.is_empty()
        {
            return Ok(text.to_string());
        }

        let mut text = String::new();
        let mut refusal = None;
        for item in response.output.iter().filter(|item| item.kind == "message") {
            for part in &item.content {
                match part.kind.as_str() {
                    "output_text" => text.push_str(part.text.as_deref().unwrap_or_default()),
                    "refusal" => refusal = part.refusal.clone().or_else(|| part.text.clone()),
                    _ => {}
                }
            }
        }

        if !text.is_empty() {
            return Ok(text);
        }

        Err(match refusal {
            Some(reason) => LlmError::Refused {
                backend: BACKEND_NAME.to_string(),
                reason: sanitize_api_error(&reason),
            },
            None => LlmError::MissingOutput {
                backend: BACKEND_NAME.to_string(),
            },
        })
    }

    fn transport_error(error: &reqwest::Error) -> LlmError {
        LlmError::Unavailable {
            backend: BACKEND_NAME.to_string(),
            message: sanitize_api_error(&error.to_string()),
        }
    }

    async fn call_api(&self, body: &ResponsesRequest<'_>) -> Result<ResponsesResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", &self.cached_auth_header)
            .json(body)
            .send()
            .await
            .map_err(|error| Self::transport_error(&error))?;

        if !response.status().is_success() {
            return Err(api_error(BACKEND_NAME, response).await);
        }

        response.json().await.map_err(|error| {
            if error.is_timeout() {
                Self::transport_error(&error)
            } else {
                LlmError::Decode {
                    backend: BACKEND_NAME.to_string(),
                    message: error.to_string(),
                }
            }
        })
    }
}

impl StructuredBackend for OpenAiBackend {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn generate<'a>(
        &'a self,
        request: StructuredRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(async move {
            let body = Self::build_request(&request);
            let response = self.call_api(&body).await?;
            if let Some(model) = response.model.as_deref() {
                tracing::debug!(backend = BACKEND_NAME, model, "structured generation returned");
            }
            Self::extract_text(&response)
        })
    }
}
