mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rudder_sync::Outcome;
use rudder_sync_api::RudderClient;
use rudder_sync_store::ArtifactStore;

#[derive(Parser)]
#[command(name = "rudder-sync")]
#[command(about = "Trigger RudderStack sync runs and check their status")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a sync run for a source
    Trigger {
        /// Service access token (falls back to RUDDERSTACK_ACCESS_TOKEN)
        #[arg(long)]
        access_token: Option<String>,
        /// Source to start a sync for
        #[arg(long)]
        source_id: String,
    },
    /// Check the status of the most recent sync run for a source
    Status {
        /// Service access token (falls back to RUDDERSTACK_ACCESS_TOKEN)
        #[arg(long)]
        access_token: Option<String>,
        /// Source to check (defaults to the id saved by the last trigger)
        #[arg(long)]
        source_id: Option<String>,
    },
}

async fn run(cli: Cli) -> Result<Outcome> {
    let store = ArtifactStore::open(config::artifact_root()?)
        .context("failed to open artifact store")?;

    match cli.command {
        Command::Trigger {
            access_token,
            source_id,
        } => {
            let client = RudderClient::new(
                config::access_token(access_token)?,
                config::api_base_url(),
            );
            Ok(commands::trigger::run(&client, &store, &source_id).await)
        }
        Command::Status {
            access_token,
            source_id,
        } => {
            let client = RudderClient::new(
                config::access_token(access_token)?,
                config::api_base_url(),
            );
            commands::status::run(&client, &store, source_id.as_deref()).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Outcomes become exit codes only here, at the process boundary.
    let code = match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    };

    std::process::exit(code);
}
