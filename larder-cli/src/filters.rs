//! Filter settings shared by the `rank` and `sort` subcommands.

use chrono::{DateTime, Utc};
use larder_core::FilterConstraints;

use crate::{ARG_EXCLUDE_EXPIRED, ARG_NOW, CliError};

/// Filter values gathered from merged configuration.
///
/// `exclude_expired` and `now` are mandatory: expiry handling is never
/// defaulted and the evaluation instant is never read from the clock.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FilterFields {
    pub(crate) max_radius_km: Option<f64>,
    pub(crate) min_freshness_percent: Option<f64>,
    pub(crate) exclude_expired: Option<bool>,
    pub(crate) now: Option<DateTime<Utc>>,
}

/// Environment variables reported when a mandatory filter value is absent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FilterEnv {
    pub(crate) exclude_expired: &'static str,
    pub(crate) now: &'static str,
}

impl FilterFields {
    pub(crate) fn into_constraints(self, env: FilterEnv) -> Result<FilterConstraints, CliError> {
        let exclude_expired = self.exclude_expired.ok_or(CliError::MissingArgument {
            field: ARG_EXCLUDE_EXPIRED,
            env: env.exclude_expired,
        })?;
        let now = self.now.ok_or(CliError::MissingArgument {
            field: ARG_NOW,
            env: env.now,
        })?;
        Ok(FilterConstraints {
            max_radius_km: self.max_radius_km,
            min_freshness_percent: self.min_freshness_percent,
            exclude_expired,
            now,
        })
    }
}
