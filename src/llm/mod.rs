pub mod http_client;
pub mod openai;
pub mod scrub;
pub mod traits;
pub mod types;

pub use http_client::{DEFAULT_BACKEND_TIMEOUT_SECS, build_backend_client_with_timeout};
pub use openai::{OPENAI_DEFAULT_BASE_URL, OpenAiBackend};
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::StructuredBackend;
pub use types::{ResponseFormat, StructuredRequest};
