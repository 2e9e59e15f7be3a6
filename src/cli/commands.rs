use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `agent-factory` - turns an agent idea and plan into a ready-to-commit repository manifest.
#[derive(Parser, Debug)]
#[command(name = "agent-factory")]
#[command(version)]
#[command(about = "Generate agent scaffolding manifests from ideas and plans.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP service (GET /healthz, POST /generate)
    Serve {
        /// Optional TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Bind host (overrides config and environment)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config and environment)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check that required environment variables are present and plausible
    CheckEnv {
        /// Additional variable to require (repeatable)
        #[arg(long = "require", value_name = "NAME")]
        require: Vec<String>,

        /// Values shorter than this are reported as invalid
        #[arg(long, default_value_t = agent_factory::env_guard::DEFAULT_MIN_LEN)]
        min_len: usize,
    },

    /// Print the schema the model is constrained to, as pretty JSON
    Schema,
}
