use crate::cli::commands::{Cli, Commands};
use agent_factory::Config;
use agent_factory::env_guard::{EnvReport, check_env, process_env};
use agent_factory::llm::ResponseFormat;
use agent_factory::transport::gateway::run_gateway;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Always required by `check-env`, on top of any `--require` names.
const REQUIRED_ENV: &[&str] = &["OPENAI_API_KEY"];

async fn run_serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = Config::load(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("load config from {}", path.display()),
        None => "load config from environment".to_string(),
    })?;
    if let Some(host) = host {
        config.gateway.host = host;
    }
    if let Some(port) = port {
        config.gateway.port = port;
    }

    info!(
        host = %config.gateway.host,
        port = config.gateway.port,
        model = %config.backend.model,
        "starting agent factory"
    );
    run_gateway(Arc::new(config)).await
}

fn run_check_env(require: &[String], min_len: usize) -> Result<()> {
    let mut names: Vec<&str> = REQUIRED_ENV.to_vec();
    for name in require {
        if !names.contains(&name.as_str()) {
            names.push(name);
        }
    }

    let violations = check_env(&process_env(), &names, min_len);
    println!("{}", EnvReport(&violations));
    if !violations.is_empty() {
        bail!("{} environment variable(s) failed validation", violations.len());
    }
    Ok(())
}

fn run_schema() -> Result<()> {
    let format = ResponseFormat::agent_manifest();
    let rendered =
        serde_json::to_string_pretty(&format.schema).context("render manifest schema")?;
    println!("{rendered}");
    Ok(())
}

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { config, host, port } => run_serve(config, host, port).await,
        Commands::CheckEnv { require, min_len } => run_check_env(&require, min_len),
        Commands::Schema => run_schema(),
    }
}
