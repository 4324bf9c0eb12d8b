//! Command-line harness for the Larder ranking pipeline.
//!
//! `larder rank` and `larder sort` load a JSON array of candidates, resolve
//! their filter and scoring settings from CLI flags, `LARDER_CMDS_*`
//! environment variables, and configuration files, then print the resulting
//! ranking as JSON. All ranking behaviour lives in `larder-scorer`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod filters;
mod input;
mod rank;
mod sort;

pub use error::CliError;

use rank::RankArgs;
use sort::SortArgs;

pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_MAX_RADIUS_KM: &str = "max-radius-km";
pub(crate) const ARG_MIN_FRESHNESS: &str = "min-freshness";
pub(crate) const ARG_EXCLUDE_EXPIRED: &str = "exclude-expired";
pub(crate) const ARG_NOW: &str = "now";
pub(crate) const ARG_PRESET: &str = "preset";
pub(crate) const ARG_PROXIMITY_WEIGHT: &str = "proximity-weight";
pub(crate) const ARG_FRESHNESS_WEIGHT: &str = "freshness-weight";
pub(crate) const ARG_RELAXED_WEIGHTS: &str = "relaxed-weights";
pub(crate) const ARG_DECIMALS: &str = "decimals";
pub(crate) const ARG_SORT_BY: &str = "by";
pub(crate) const ARG_ORDER: &str = "order";

pub(crate) const ENV_RANK_CANDIDATES: &str = "LARDER_CMDS_RANK_CANDIDATES";
pub(crate) const ENV_RANK_EXCLUDE_EXPIRED: &str = "LARDER_CMDS_RANK_EXCLUDE_EXPIRED";
pub(crate) const ENV_RANK_NOW: &str = "LARDER_CMDS_RANK_NOW";
pub(crate) const ENV_RANK_PROXIMITY_WEIGHT: &str = "LARDER_CMDS_RANK_PROXIMITY_WEIGHT";
pub(crate) const ENV_RANK_FRESHNESS_WEIGHT: &str = "LARDER_CMDS_RANK_FRESHNESS_WEIGHT";
pub(crate) const ENV_SORT_CANDIDATES: &str = "LARDER_CMDS_SORT_CANDIDATES";
pub(crate) const ENV_SORT_EXCLUDE_EXPIRED: &str = "LARDER_CMDS_SORT_EXCLUDE_EXPIRED";
pub(crate) const ENV_SORT_NOW: &str = "LARDER_CMDS_SORT_NOW";
pub(crate) const ENV_SORT_BY: &str = "LARDER_CMDS_SORT_SORT_BY";

/// Run the Larder CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments fail to parse, configuration is
/// incomplete, the candidate file cannot be read, or the ranking request is
/// rejected.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Rank(args) => rank::run_rank(args, &mut stdout),
        Command::Sort(args) => sort::run_sort(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "larder",
    about = "Rank perishable listings by proximity and freshness",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter candidates and order them by combined score.
    Rank(RankArgs),
    /// Filter candidates and order them by a single attribute.
    Sort(SortArgs),
}

#[cfg(test)]
mod tests;
