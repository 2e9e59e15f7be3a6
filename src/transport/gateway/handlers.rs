use super::{AppState, GENERATION_FAILED_ERROR, INVALID_PAYLOAD_ERROR};
use crate::error::GenerationError;
use crate::schema::Violation;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Value, json};

/// GET /healthz: liveness plus the configured model id
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "model": state.pipeline.model(),
    }))
}

/// POST /generate. The body is parsed regardless of `Content-Type`.
pub(super) async fn handle_generate(State(state): State<AppState>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::warn!(%error, "rejected unparseable generate body");
            let details = vec![Violation::root(format!("invalid JSON: {error}"))];
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": INVALID_PAYLOAD_ERROR, "details": details})),
            )
                .into_response();
        }
    };

    match state.pipeline.generate(&payload).await {
        Ok(manifest) => (StatusCode::OK, Json(manifest)).into_response(),
        Err(error) => error_response(&error).into_response(),
    }
}

/// Map a pipeline failure to its status code and JSON body.
pub(super) fn error_response(error: &GenerationError) -> (StatusCode, Json<Value>) {
    match error {
        GenerationError::RequestInvalid(violations) => {
            tracing::warn!(violations = %violations, "rejected invalid generate request");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": INVALID_PAYLOAD_ERROR, "details": violations})),
            )
        }
        GenerationError::SchemaViolation(violations) => {
            tracing::error!(kind = error.kind(), error = %error, "agent manifest generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": GENERATION_FAILED_ERROR,
                    "details": error.to_string(),
                    "violations": violations,
                })),
            )
        }
        GenerationError::BackendUnavailable(_)
        | GenerationError::BackendError(_)
        | GenerationError::MalformedPayload(_) => {
            tracing::error!(kind = error.kind(), error = %error, "agent manifest generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": GENERATION_FAILED_ERROR, "details": error.to_string()})),
            )
        }
    }
}
