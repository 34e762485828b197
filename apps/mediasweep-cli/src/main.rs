//! mediasweep - synchronize image inventory between a WordPress site and
//! Cloudinary.
//!
//! Two subcommands:
//! - `fetch`: paginate the site's GraphQL endpoint and persist the list of
//!   referenced Cloudinary public ids
//! - `reconcile`: compare that list against the Cloudinary account and
//!   delete resources no longer referenced

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mediasweep_cli::commands;
use mediasweep_cli::error::CliResult;

/// mediasweep - WordPress/Cloudinary image inventory sync
#[derive(Parser)]
#[command(name = "mediasweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the media inventory referenced by the WordPress site
    Fetch(commands::fetch::FetchArgs),

    /// Compare the inventory against Cloudinary and delete unreferenced resources
    Reconcile(commands::reconcile::ReconcileArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Fetch(args) => commands::fetch::execute(args).await,
        Commands::Reconcile(args) => commands::reconcile::execute(args).await,
    }
}
