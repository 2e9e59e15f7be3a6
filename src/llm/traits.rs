use super::types::StructuredRequest;
use crate::error::LlmError;
use std::future::Future;
use std::pin::Pin;

/// A backend that turns a prompt plus a response schema into text meant to
/// conform to that schema.
pub trait StructuredBackend: Send + Sync {
    /// Backend identifier used in error messages (e.g. "OpenAI").
    fn name(&self) -> &str;

    /// Issue exactly one call and return the raw textual payload.
    fn generate<'a>(
        &'a self,
        request: StructuredRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}
