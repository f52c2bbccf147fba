//! Orchestration of one maintenance run.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use attic_journal::ActivityJournal;
use attic_sweep::{load_plan, SweepConfig, Sweeper};
use std::fs;

/// Load sweep settings from the optional TOML file, then apply flag
/// overrides.
fn resolve_config(cli: &Cli) -> Result<SweepConfig> {
    let mut config = match &cli.settings {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| CliError::Settings(format!("{}: {}", path.display(), e)))?;
            toml::from_str(&contents)?
        }
        None => SweepConfig::default(),
    };

    if let Some(days) = cli.age_days {
        config.age_threshold_hours = days * 24;
    }
    if cli.dry_run {
        config.dry_run = true;
    }
    Ok(config)
}

/// Run one full maintenance pass.
///
/// Sequence: resolve settings, load the plan, open the journal, sweep each
/// folder in plan order, then close the journal and wait for the consumer to
/// drain. Any error out of this function is a startup failure; once sweeping
/// has begun, folder problems are journaled rather than returned.
pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let folders = load_plan(&cli.folders)?;
    let (writer, task) = ActivityJournal::open(&cli.log_file).await?;

    let mut sweeper = Sweeper::new(config);
    let metrics = sweeper.sweep(&folders, &writer);

    // Dropping the last writer closes the channel; the consumer drains the
    // backlog, flushes, and exits.
    drop(writer);
    let written = task.finish().await?;

    tracing::info!("Journal closed after {} lines", written);
    tracing::info!("{}", metrics.summary());
    Ok(())
}
