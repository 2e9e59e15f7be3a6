use crate::schema::Violations;
use thiserror::Error;

// ─── Pipeline errors ─────────────────────────────────────────────────────────

/// Every way a single generation request can fail.
///
/// `RequestInvalid` is the caller's fault and never reaches the backend; the
/// rest are server-side and map to a 500 at the HTTP boundary.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    RequestInvalid(Violations),

    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("backend error: {0}")]
    BackendError(String),

    #[error("backend payload is not valid JSON: {0}")]
    MalformedPayload(String),

    #[error("backend payload violates the manifest schema: {0}")]
    SchemaViolation(Violations),
}

impl GenerationError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::RequestInvalid(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::RequestInvalid(_) => "request_invalid",
            Self::BackendUnavailable(_) => "backend_unavailable",
            Self::BackendError(_) => "backend_error",
            Self::MalformedPayload(_) => "malformed_payload",
            Self::SchemaViolation(_) => "schema_violation",
        }
    }
}

// ─── Backend errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{backend} request failed: {message}")]
    Unavailable { backend: String, message: String },

    #[error("{backend} API error ({status}): {body}")]
    Api {
        backend: String,
        status: u16,
        body: String,
    },

    #[error("{backend} response JSON decode failed: {message}")]
    Decode { backend: String, message: String },

    #[error("{backend} response did not contain output text")]
    MissingOutput { backend: String },

    #[error("{backend} refused to generate: {reason}")]
    Refused { backend: String, reason: String },
}

impl From<LlmError> for GenerationError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::Unavailable { .. } => Self::BackendUnavailable(error.to_string()),
            LlmError::Api { .. }
            | LlmError::Decode { .. }
            | LlmError::MissingOutput { .. }
            | LlmError::Refused { .. } => Self::BackendError(error.to_string()),
        }
    }
}

// ─── Schema errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema {name} failed to compile: {message}")]
    Compile { name: &'static str, message: String },
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingCredential(&'static str),

    #[error("failed to load config: {0}")]
    Load(String),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
