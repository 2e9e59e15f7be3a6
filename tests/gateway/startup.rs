use agent_factory::config::Config;
use agent_factory::error::ConfigError;
use agent_factory::transport::gateway::{build_state, run_gateway, run_gateway_with_listener};
use std::sync::Arc;

fn is_missing_credential(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingCredential("OPENAI_API_KEY"))
    )
}

#[test]
fn build_state_requires_api_key() {
    let err = build_state(&Config::default())
        .err()
        .expect("missing credential should fail");
    assert!(is_missing_credential(&err));
}

#[tokio::test]
async fn gateway_refuses_to_start_without_api_key() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral gateway listener should bind");

    let result = run_gateway_with_listener(listener, Arc::new(Config::default())).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_api_key_is_reported_before_bind() {
    // Hold the port so a bind attempt would fail with a different error.
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral listener should bind");
    let port = occupied
        .local_addr()
        .expect("listener should expose local address")
        .port();

    let mut config = Config::default();
    config.gateway.host = "127.0.0.1".to_string();
    config.gateway.port = port;

    let err = run_gateway(Arc::new(config))
        .await
        .expect_err("missing credential should fail");
    assert!(is_missing_credential(&err), "unexpected error: {err:#}");
}
