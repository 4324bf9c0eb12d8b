//! Attributes a buyer may sort on instead of the combined score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RankingError;

/// Raw candidate attribute used by filter+sort mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Listing price.
    Price,
    /// Distance from the buyer in kilometres.
    Distance,
    /// Remaining shelf life percentage.
    Freshness,
    /// Expiration instant.
    Expiration,
}

impl SortField {
    /// Every recognised field.
    pub const ALL: [Self; 4] = [Self::Price, Self::Distance, Self::Freshness, Self::Expiration];

    /// Order used when the caller does not choose one.
    ///
    /// Cheapest, closest, freshest, and soonest-expiring come first.
    ///
    /// # Examples
    /// ```
    /// use larder_core::{SortField, SortOrder};
    ///
    /// assert_eq!(SortField::Price.default_order(), SortOrder::Ascending);
    /// assert_eq!(SortField::Freshness.default_order(), SortOrder::Descending);
    /// ```
    #[must_use]
    pub const fn default_order(self) -> SortOrder {
        match self {
            Self::Price | Self::Distance | Self::Expiration => SortOrder::Ascending,
            Self::Freshness => SortOrder::Descending,
        }
    }

    /// Return the field name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Distance => "distance",
            Self::Freshness => "freshness",
            Self::Expiration => "expiration",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| {
                RankingError::invalid(
                    "sort_field",
                    s,
                    "must be one of price, distance, freshness, expiration",
                )
            })
    }
}

/// Direction of a field sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest value first.
    #[serde(alias = "asc")]
    Ascending,
    /// Largest value first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Return the short order name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(RankingError::invalid(
                "sort_order",
                s,
                "must be asc or desc",
            )),
        }
    }
}
