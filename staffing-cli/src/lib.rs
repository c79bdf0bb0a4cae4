//! Command-line interface for the staffing engine.
//!
//! The `staffing rank` command loads a JSON staffing snapshot (a role, its
//! project and the candidate pool with their histories), scores every
//! candidate with a [`SelectionAgent`](staffing_scorer::SelectionAgent), and
//! prints the winning evaluation as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod rank;
mod snapshot;

pub use error::CliError;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_RANK_SNAPSHOT: &str = "snapshot";
pub(crate) const ARG_RANK_WEIGHTS: &str = "weights";
pub(crate) const ENV_RANK_SNAPSHOT: &str = "STAFFING_CMDS_RANK_SNAPSHOT";

/// Run the staffing CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when an
/// input cannot be read, or when ranking fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "staffing",
    about = "Candidate compatibility scoring for project roles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the candidates of a staffing snapshot.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
