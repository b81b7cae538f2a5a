#![allow(clippy::module_name_repetitions)]

//! Interactive menu for the ingestion tool.
//!
//! Provides a menu-driven interface using `dialoguer` for running the same
//! actions as the CLI subcommands without memorizing them.

use dialoguer::{Input, Select};
use switchy_database::Database;
use wilayah_cli_utils::MultiProgress;
use wilayah_region_models::RegionId;

use crate::commands::{self, ShowTarget};

/// Top-level actions available in the interactive menu.
enum IngestAction {
    Run,
    TestConnection,
    Stats,
    Show,
    History,
    Clean,
}

impl IngestAction {
    const ALL: &[Self] = &[
        Self::Run,
        Self::TestConnection,
        Self::Stats,
        Self::Show,
        Self::History,
        Self::Clean,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Run => "Run ingestion",
            Self::TestConnection => "Test remote connection",
            Self::Stats => "Show statistics",
            Self::Show => "Browse regions",
            Self::History => "Show run history",
            Self::Clean => "Clean all tables",
        }
    }
}

/// Prompts the user to pick an action and runs it.
///
/// # Errors
///
/// Returns an error if a prompt or the selected action fails.
pub async fn run(db: &dyn Database, multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = IngestAction::ALL.iter().map(IngestAction::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match IngestAction::ALL[idx] {
        IngestAction::Run => {
            commands::run_ingestion(db, multi).await?;
        }
        IngestAction::TestConnection => {
            commands::test_connection(db).await?;
        }
        IngestAction::Stats => commands::show_stats(db).await?,
        IngestAction::Show => browse(db).await?,
        IngestAction::History => commands::show_history(db, 10).await?,
        IngestAction::Clean => {
            commands::clean(db, false).await?;
        }
    }

    Ok(())
}

/// Walks down the hierarchy one level at a time, letting the user pick a
/// parent at each step.
async fn browse(db: &dyn Database) -> Result<(), Box<dyn std::error::Error>> {
    let mut target = ShowTarget::Provinces;

    loop {
        let rows = commands::show_regions(db, target).await?;
        if rows.is_empty() || matches!(target, ShowTarget::Villages(_)) {
            return Ok(());
        }

        let Some(id) = prompt_optional_id("Enter an id to drill down (empty to stop)")? else {
            return Ok(());
        };

        target = match target {
            ShowTarget::Provinces => ShowTarget::Regencies(id),
            ShowTarget::Regencies(_) => ShowTarget::Districts(id),
            ShowTarget::Districts(_) | ShowTarget::Villages(_) => ShowTarget::Villages(id),
        };
    }
}

fn prompt_optional_id(prompt: &str) -> Result<Option<RegionId>, Box<dyn std::error::Error>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(input.trim().parse()?))
    }
}
