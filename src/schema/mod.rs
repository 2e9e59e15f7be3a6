//! Declarative shapes for the request, the model-facing output, and the
//! post-parse manifest check. Pure data; no side effects.

mod compiled;
pub mod manifest;
pub mod request;
mod violation;

pub use compiled::CompiledSchema;
pub use manifest::{
    DraftFile, DraftManifest, GeneratedFile, GenerationManifest, MANIFEST_SCHEMA_NAME,
    POST_PARSE_SCHEMA_NAME, model_output_schema, post_parse_schema,
};
pub use request::{
    AgentIdea, GenerationContext, GenerationRequest, ImplementationPlan, REQUEST_SCHEMA_NAME,
    request_schema,
};
pub use violation::{Violation, Violations};
