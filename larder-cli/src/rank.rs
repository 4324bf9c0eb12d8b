//! Rank command implementation for the Larder CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use clap::Parser;
use larder_core::{FilterConstraints, WeightMode, WeightPair, WeightPreset};
use larder_scorer::{Precision, Ranker};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::filters::{FilterEnv, FilterFields};
use crate::input::{load_candidates, write_result};
use crate::{
    ARG_CANDIDATES, ARG_DECIMALS, ARG_EXCLUDE_EXPIRED, ARG_FRESHNESS_WEIGHT, ARG_MAX_RADIUS_KM,
    ARG_MIN_FRESHNESS, ARG_NOW, ARG_PRESET, ARG_PROXIMITY_WEIGHT, ARG_RELAXED_WEIGHTS, CliError,
    ENV_RANK_CANDIDATES, ENV_RANK_EXCLUDE_EXPIRED, ENV_RANK_FRESHNESS_WEIGHT, ENV_RANK_NOW,
    ENV_RANK_PROXIMITY_WEIGHT,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank listings by a weighted blend of proximity and freshness. \
                 Candidates are read from a JSON array; filter and weight \
                 settings can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank listings by combined score"
)]
#[ortho_config(prefix = "LARDER")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing an array of candidates.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Furthest distance accepted, in kilometres. Required for ranking.
    #[arg(long = ARG_MAX_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) max_radius_km: Option<f64>,
    /// Lowest freshness percentage accepted.
    #[arg(long = ARG_MIN_FRESHNESS, value_name = "percent")]
    #[serde(default)]
    pub(crate) min_freshness_percent: Option<f64>,
    /// Whether expired listings are removed (`true` or `false`).
    #[arg(long = ARG_EXCLUDE_EXPIRED, value_name = "bool")]
    #[serde(default)]
    pub(crate) exclude_expired: Option<bool>,
    /// Evaluation instant in RFC 3339 form.
    #[arg(long = ARG_NOW, value_name = "rfc3339")]
    #[serde(default)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Named weighting: balanced, nearby, or fresh.
    #[arg(long = ARG_PRESET, value_name = "name")]
    #[serde(default)]
    pub(crate) preset: Option<WeightPreset>,
    /// Explicit proximity weight; requires --freshness-weight.
    #[arg(long = ARG_PROXIMITY_WEIGHT, value_name = "percent")]
    #[serde(default)]
    pub(crate) proximity_weight: Option<f64>,
    /// Explicit freshness weight; requires --proximity-weight.
    #[arg(long = ARG_FRESHNESS_WEIGHT, value_name = "percent")]
    #[serde(default)]
    pub(crate) freshness_weight: Option<f64>,
    /// Accept weights that do not total 100.
    #[arg(long = ARG_RELAXED_WEIGHTS, value_name = "bool")]
    #[serde(default)]
    pub(crate) relaxed_weights: Option<bool>,
    /// Decimal places kept on normalised scores.
    #[arg(long = ARG_DECIMALS, value_name = "count")]
    #[serde(default)]
    pub(crate) decimals: Option<u8>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the candidate file.
    pub(crate) candidates: Utf8PathBuf,
    /// Hard constraints for the filter stage.
    pub(crate) constraints: FilterConstraints,
    /// Scoring settings.
    pub(crate) ranker: Ranker,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_RANK_CANDIDATES,
        })?;
        let constraints = FilterFields {
            max_radius_km: args.max_radius_km,
            min_freshness_percent: args.min_freshness_percent,
            exclude_expired: args.exclude_expired,
            now: args.now,
        }
        .into_constraints(FilterEnv {
            exclude_expired: ENV_RANK_EXCLUDE_EXPIRED,
            now: ENV_RANK_NOW,
        })?;
        let weights = resolve_weights(args.preset, args.proximity_weight, args.freshness_weight)?;
        let mode = if args.relaxed_weights.unwrap_or(false) {
            WeightMode::Relaxed
        } else {
            WeightMode::Strict
        };
        let precision = args
            .decimals
            .map_or(Ok(Precision::DEFAULT), Precision::new)?;

        Ok(Self {
            candidates,
            constraints,
            ranker: Ranker::new(weights)
                .with_mode(mode)
                .with_precision(precision),
        })
    }
}

/// Explicit weights win over a preset; a half-specified pair is an error.
fn resolve_weights(
    preset: Option<WeightPreset>,
    proximity: Option<f64>,
    freshness: Option<f64>,
) -> Result<WeightPair, CliError> {
    match (proximity, freshness) {
        (Some(proximity_weight), Some(freshness_weight)) => {
            Ok(WeightPair::new(proximity_weight, freshness_weight))
        }
        (None, None) => Ok(preset.unwrap_or_default().weights()),
        (Some(_), None) => Err(CliError::MissingArgument {
            field: ARG_FRESHNESS_WEIGHT,
            env: ENV_RANK_FRESHNESS_WEIGHT,
        }),
        (None, Some(_)) => Err(CliError::MissingArgument {
            field: ARG_PROXIMITY_WEIGHT,
            env: ENV_RANK_PROXIMITY_WEIGHT,
        }),
    }
}

pub(crate) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_rank(&config, writer)
}

pub(crate) fn execute_rank(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let candidates = load_candidates(&config.candidates)?;
    let result = config.ranker.rank(&candidates, &config.constraints)?;
    write_result(writer, &result)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
