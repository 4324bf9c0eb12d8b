//! Sort command implementation for the Larder CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use clap::Parser;
use larder_core::{FilterConstraints, SortField, SortOrder};
use larder_scorer::filter_and_sort;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::filters::{FilterEnv, FilterFields};
use crate::input::{load_candidates, write_result};
use crate::{
    ARG_CANDIDATES, ARG_EXCLUDE_EXPIRED, ARG_MAX_RADIUS_KM, ARG_MIN_FRESHNESS, ARG_NOW, ARG_ORDER,
    ARG_SORT_BY, CliError, ENV_SORT_BY, ENV_SORT_CANDIDATES, ENV_SORT_EXCLUDE_EXPIRED,
    ENV_SORT_NOW,
};

/// CLI arguments for the `sort` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Filter listings and order the survivors by price, distance, \
                 freshness, or expiration without computing scores.",
    about = "Sort listings by a single attribute"
)]
#[ortho_config(prefix = "LARDER")]
pub(crate) struct SortArgs {
    /// Path to a JSON file containing an array of candidates.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Furthest distance accepted, in kilometres.
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
    /// Attribute to sort on: price, distance, freshness, or expiration.
    #[arg(long = ARG_SORT_BY, value_name = "field")]
    #[serde(default)]
    pub(crate) sort_by: Option<SortField>,
    /// Sort direction (asc or desc); defaults per attribute.
    #[arg(long = ARG_ORDER, value_name = "order")]
    #[serde(default)]
    pub(crate) order: Option<SortOrder>,
}

impl SortArgs {
    pub(crate) fn into_config(self) -> Result<SortConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SortConfig::try_from(merged)
    }
}

/// Resolved `sort` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SortConfig {
    /// Path to the candidate file.
    pub(crate) candidates: Utf8PathBuf,
    /// Hard constraints for the filter stage.
    pub(crate) constraints: FilterConstraints,
    /// Attribute sorted on.
    pub(crate) field: SortField,
    /// Explicit direction, if any.
    pub(crate) order: Option<SortOrder>,
}

impl TryFrom<SortArgs> for SortConfig {
    type Error = CliError;

    fn try_from(args: SortArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_SORT_CANDIDATES,
        })?;
        let field = args.sort_by.ok_or(CliError::MissingArgument {
            field: ARG_SORT_BY,
            env: ENV_SORT_BY,
        })?;
        let constraints = FilterFields {
            max_radius_km: args.max_radius_km,
            min_freshness_percent: args.min_freshness_percent,
            exclude_expired: args.exclude_expired,
            now: args.now,
        }
        .into_constraints(FilterEnv {
            exclude_expired: ENV_SORT_EXCLUDE_EXPIRED,
            now: ENV_SORT_NOW,
        })?;

        Ok(Self {
            candidates,
            constraints,
            field,
            order: args.order,
        })
    }
}

pub(crate) fn run_sort(args: SortArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_sort(&config, writer)
}

pub(crate) fn execute_sort(config: &SortConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let candidates = load_candidates(&config.candidates)?;
    let result = filter_and_sort(&candidates, &config.constraints, config.field, config.order)?;
    write_result(writer, &result)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SortConfig, CliError> {
    let merged = SortArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SortConfig::try_from(merged)
}
