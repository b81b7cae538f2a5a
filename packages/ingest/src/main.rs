#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the region hierarchy ingestion tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wilayah_database::db;
use wilayah_ingest::commands::{self, ShowTarget};
use wilayah_ingest_models::ConnectionStatus;
use wilayah_region_models::RegionId;

#[derive(Parser)]
#[command(
    name = "wilayah_ingest",
    about = "Loads Indonesian provinces, regencies, districts and villages"
)]
struct Cli {
    /// Database file (overrides `WILAYAH_DB_PATH`)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace all hierarchy tables with fresh data (remote API, or the
    /// embedded dataset if the API is unreachable)
    Run,
    /// Check whether the remote API is reachable and returns valid data
    TestConnection,
    /// Delete every province, regency, district and village
    Clean {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show row counts and integrity issues
    Stats,
    /// List stored regions (provinces by default)
    Show {
        /// List the regencies of this province
        #[arg(long)]
        province: Option<RegionId>,
        /// List the districts of this regency
        #[arg(long)]
        regency: Option<RegionId>,
        /// List the villages of this district
        #[arg(long)]
        district: Option<RegionId>,
    },
    /// Show recent ingestion runs
    History {
        /// Number of runs to show
        #[arg(long, default_value = "10")]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = wilayah_cli_utils::init_logger();
    let cli = Cli::parse();

    let path = db::resolve_path(cli.db.as_deref());
    let database = db::open_db(&path).await?;

    let Some(command) = cli.command else {
        return wilayah_ingest::interactive::run(database.as_ref(), &multi).await;
    };

    match command {
        Commands::Run => {
            commands::run_ingestion(database.as_ref(), &multi).await?;
        }
        Commands::TestConnection => {
            let status = commands::test_connection(database.as_ref()).await?;
            if matches!(status, ConnectionStatus::Failed { .. }) {
                std::process::exit(1);
            }
        }
        Commands::Clean { yes } => {
            commands::clean(database.as_ref(), yes).await?;
        }
        Commands::Stats => {
            commands::show_stats(database.as_ref()).await?;
        }
        Commands::Show {
            province,
            regency,
            district,
        } => {
            let target = ShowTarget::from_parents(province, regency, district);
            commands::show_regions(database.as_ref(), target).await?;
        }
        Commands::History { limit } => {
            commands::show_history(database.as_ref(), limit).await?;
        }
    }

    Ok(())
}
