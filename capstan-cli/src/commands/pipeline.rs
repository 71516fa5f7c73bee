//! Pipeline command handlers
//!
//! Handles pipeline job commands: creation, lookup, update, and deletion,
//! all routed through the provider's reconciliation components.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use capstan_client::JenkinsClient;
use capstan_core::diagnostics::Diagnostics;
use capstan_core::domain::pipeline::{PipelineDefinition, ResourceRecord};
use capstan_provider::{
    JenkinsProvider, PipelineDataSource, PipelineQuery, PipelineResource, ProviderConfig,
    ReadOutcome,
};

use crate::config::Config;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Create a pipeline job from a build script
    Create {
        /// Name of the pipeline job
        name: String,

        /// Path to the build script file
        #[arg(short, long)]
        script: String,

        /// Description for the job
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Show an existing pipeline job, including its last build
    Show {
        /// Name (or id) of the pipeline job
        name: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Refresh a pipeline job from the server
    Read {
        /// Name of the pipeline job
        name: String,
    },
    /// Update an existing pipeline job
    Update {
        /// Name of the pipeline job
        name: String,

        /// Path to the build script file
        #[arg(short, long)]
        script: String,

        /// Description for the job
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a pipeline job
    Delete {
        /// Name of the pipeline job
        name: String,
    },
}

/// Handle pipeline commands
///
/// Configures the provider (including the connectivity check) and routes the
/// subcommand to its handler.
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    let provider = JenkinsProvider::new();
    let provider_config = ProviderConfig::new(&config.url, &config.username, &config.api_token);
    let client = provider
        .configure(&provider_config)
        .await
        .with_context(|| format!("Failed to connect to {}", config.url))?;

    match command {
        PipelineCommands::Create {
            name,
            script,
            description,
        } => create_pipeline(client, &name, &script, description).await,
        PipelineCommands::Show { name, json } => show_pipeline(client, &name, json).await,
        PipelineCommands::Read { name } => read_pipeline(client, &name).await,
        PipelineCommands::Update {
            name,
            script,
            description,
        } => update_pipeline(client, &name, &script, description).await,
        PipelineCommands::Delete { name } => delete_pipeline(client, &name).await,
    }
}

/// Create a new pipeline job from a script file
async fn create_pipeline(
    client: Arc<JenkinsClient>,
    name: &str,
    script_path: &str,
    description: Option<String>,
) -> Result<()> {
    let script = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script file: {}", script_path))?;

    let plan = PipelineDefinition {
        name: name.to_string(),
        description,
        script,
    };

    let resource = PipelineResource::new(client);
    let record = resource.create(&plan).await?;

    println!("{}", "✓ Pipeline job created successfully!".green().bold());
    print_record(&record);

    Ok(())
}

/// Look up and display a pipeline job with its last build
async fn show_pipeline(client: Arc<JenkinsClient>, name: &str, json: bool) -> Result<()> {
    let data_source = PipelineDataSource::new(client);

    let query = PipelineQuery {
        id: None,
        name: Some(name.to_string()),
    };
    let (facts, diagnostics) = data_source.read(&query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&facts)?);
        print_warnings(&diagnostics);
        return Ok(());
    }

    println!("{}", facts.name.bold());
    if !facts.description.is_empty() {
        println!("  {}", facts.description.dimmed());
    }
    if facts.last_build_status.is_empty() {
        println!("  Last build: {}", "none".dimmed());
    } else {
        println!(
            "  Last build: {} ({} ms)",
            colorize_status(&facts.last_build_status),
            facts.last_build_duration_ms
        );
    }
    println!();
    println!("{}", facts.script);

    print_warnings(&diagnostics);

    Ok(())
}

/// Refresh a pipeline job from the server and display the result
async fn read_pipeline(client: Arc<JenkinsClient>, name: &str) -> Result<()> {
    let resource = PipelineResource::new(client);

    let state = ResourceRecord::skeleton(name);
    match resource.read(&state).await? {
        ReadOutcome::Removed => {
            println!(
                "{}",
                format!("Pipeline job '{}' no longer exists on the server.", name).yellow()
            );
        }
        ReadOutcome::Refreshed {
            record,
            diagnostics,
        } => {
            print_record(&record);
            print_warnings(&diagnostics);
        }
    }

    Ok(())
}

/// Update an existing pipeline job from a script file
async fn update_pipeline(
    client: Arc<JenkinsClient>,
    name: &str,
    script_path: &str,
    description: Option<String>,
) -> Result<()> {
    let script = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script file: {}", script_path))?;

    let plan = PipelineDefinition {
        name: name.to_string(),
        description,
        script,
    };
    let state = ResourceRecord::skeleton(name);

    let resource = PipelineResource::new(client);
    let record = resource.update(&plan, &state).await?;

    println!("{}", "✓ Pipeline job updated successfully!".green().bold());
    print_record(&record);

    Ok(())
}

/// Delete a pipeline job
async fn delete_pipeline(client: Arc<JenkinsClient>, name: &str) -> Result<()> {
    let resource = PipelineResource::new(client);

    let state = ResourceRecord::skeleton(name);
    resource.delete(&state).await?;

    println!(
        "{}",
        format!("✓ Pipeline job '{}' deleted.", name).green().bold()
    );

    Ok(())
}

fn print_record(record: &ResourceRecord) {
    println!("  ID:          {}", record.id.cyan());
    println!("  Name:        {}", record.name.bold());
    if !record.description.is_empty() {
        println!("  Description: {}", record.description.dimmed());
    }
    if let Some(last_updated) = record.last_updated {
        println!(
            "  Updated:     {}",
            last_updated.to_rfc3339().dimmed()
        );
    }
}

fn print_warnings(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        println!(
            "{} {}",
            "warning:".yellow().bold(),
            format!("{}: {}", diagnostic.summary, diagnostic.detail).yellow()
        );
    }
}

fn colorize_status(status: &str) -> ColoredString {
    match status {
        "SUCCESS" => status.green(),
        "FAILURE" => status.red(),
        "UNSTABLE" => status.yellow(),
        _ => status.normal(),
    }
}
