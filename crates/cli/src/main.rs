use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use uns_resolver_host::{on_cronjob, on_name_lookup, CronjobRequest, NameLookupRequest};
use uns_resolver_jobs::{JobRunner, TldSyncJob};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "uns-resolver")]
#[command(version)]
#[command(about = "Unstoppable Domains name-lookup adapter")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a domain to an address for one chain
    Resolve {
        /// Chain identifier, e.g. eip155:1
        #[arg(long, default_value = "eip155:1")]
        chain_id: String,

        /// Domain to resolve, e.g. alice.crypto
        domain: String,
    },
    /// Refresh the supported-TLD cache from the registry once
    SyncTlds,
    /// Run the periodic TLD sync until interrupted
    Daemon,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.log_level)?;
    bootstrap::init_logging(&config);

    let state = di::build_state(&config)?;

    match cli.command {
        Command::Resolve { chain_id, domain } => {
            let request = NameLookupRequest { chain_id, domain };
            match on_name_lookup(&state, request).await {
                Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                None => println!("null"),
            }
        }
        Command::SyncTlds => {
            on_cronjob(
                &state,
                CronjobRequest {
                    method: "execute".to_string(),
                },
            )
            .await?;
        }
        Command::Daemon => {
            let shutdown = CancellationToken::new();
            let job = TldSyncJob::new(Arc::clone(&state.sync_tlds));
            JobRunner::new()
                .with_tld_sync(job)
                .with_shutdown_token(shutdown.clone())
                .start()
                .await;

            info!("TLD sync job running; press ctrl-c to stop");
            tokio::signal::ctrl_c().await?;
            shutdown.cancel();
            info!("Shutdown complete");
        }
    }

    Ok(())
}
