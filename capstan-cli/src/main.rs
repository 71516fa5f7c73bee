//! Capstan CLI
//!
//! Command-line interface for managing pipeline jobs on a Jenkins-compatible
//! CI server, driving the same provider components the declarative host uses.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "capstan")]
#[command(about = "Capstan pipeline-job CLI", long_about = None)]
struct Cli {
    /// CI server URL
    #[arg(long, env = "JENKINS_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Account used for authentication
    #[arg(long, env = "JENKINS_USER")]
    user: String,

    /// API token paired with the account
    #[arg(long, env = "JENKINS_TOKEN", hide_env_values = true)]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        url: cli.url,
        username: cli.user,
        api_token: cli.token,
    };

    handle_command(cli.command, &config).await
}
