//! Rank command implementation for the staffing CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use staffing_scorer::SelectionAgent;

use crate::fs::file_is_file;
use crate::snapshot::{load_snapshot, load_weights};
use crate::{ARG_RANK_SNAPSHOT, ARG_RANK_WEIGHTS, CliError, ENV_RANK_SNAPSHOT};

/// Agent identifier used when none is configured.
pub(crate) const DEFAULT_AGENT_ID: &str = "staffing-cli";

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every candidate of a staffing snapshot against its \
                 role and print the best match as JSON. The weight profile \
                 and reference date can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Rank candidates for a project role"
)]
#[ortho_config(prefix = "STAFFING")]
pub(crate) struct RankArgs {
    /// Path to a JSON staffing snapshot.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Path to a JSON weight profile.
    #[arg(long = ARG_RANK_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Date tenure is measured against (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "date")]
    #[serde(default)]
    pub(crate) reference_date: Option<NaiveDate>,
    /// Identifier reported in log lines.
    #[arg(long, value_name = "id")]
    #[serde(default)]
    pub(crate) agent_id: Option<String>,
    /// Print the full ranking instead of the winner.
    #[arg(long)]
    #[serde(default)]
    pub(crate) all: bool,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) snapshot: Utf8PathBuf,
    pub(crate) weights: Option<Utf8PathBuf>,
    pub(crate) reference_date: Option<NaiveDate>,
    pub(crate) agent_id: String,
    pub(crate) all: bool,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.snapshot, ARG_RANK_SNAPSHOT)?;
        if let Some(weights) = &self.weights {
            Self::require_existing(weights, ARG_RANK_WEIGHTS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_RANK_SNAPSHOT,
            env: ENV_RANK_SNAPSHOT,
        })?;
        Ok(Self {
            snapshot,
            weights: args.weights,
            reference_date: args.reference_date,
            agent_id: args
                .agent_id
                .unwrap_or_else(|| DEFAULT_AGENT_ID.to_owned()),
            all: args.all,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let payload = execute_rank(&config)?;
    write_payload(writer, &payload)
}

/// Score the snapshot described by `config` and render the result as JSON.
pub(crate) fn execute_rank(config: &RankConfig) -> Result<String, CliError> {
    let snapshot = load_snapshot(&config.snapshot)?;
    let weights = load_weights(config.weights.as_deref())?;
    let role = snapshot.role.clone();
    let project = snapshot.project;
    let (candidates, database) = snapshot.into_pool();

    let mut agent = SelectionAgent::new(config.agent_id.clone(), weights, database)?;
    if let Some(reference_date) = config.reference_date {
        agent = agent.with_reference_date(reference_date);
    }
    info!(
        "agent {} ranking {} candidates for role {} (max score {:.2})",
        agent.id(),
        candidates.len(),
        role.id,
        agent.weights().max_score()
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let rendered = if config.all {
        let ranking = runtime.block_on(agent.rank(&candidates, &role, &project))?;
        serde_json::to_string_pretty(&ranking)
    } else {
        let winner = runtime.block_on(agent.vote(&candidates, &role, &project))?;
        serde_json::to_string_pretty(&winner)
    };
    rendered.map_err(CliError::SerializeRanking)
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
