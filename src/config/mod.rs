mod env_overrides;
mod loader;
pub mod schema;

pub use schema::{BackendConfig, Config, DEFAULT_MAX_BODY_BYTES, DEFAULT_MODEL, GatewayConfig};
