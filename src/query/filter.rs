use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::models::Purpose;

/// Result ordering for one search.
///
/// The catalog has no timestamp field; it is delivered newest-first, so
/// `Newest` keeps the feed order and `Oldest` reverses it. Price orderings
/// are stable, ties keep feed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    PriceLowHigh,
    PriceHighLow,
}

impl FromStr for SortBy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "newest" => Ok(SortBy::Newest),
            "oldest" => Ok(SortBy::Oldest),
            "price_low_high" => Ok(SortBy::PriceLowHigh),
            "price_high_low" => Ok(SortBy::PriceHighLow),
            other => bail!("unknown sort option: {:?}", other),
        }
    }
}

/// The constraints and sort directive for one search request.
///
/// Every constraint is optional; an unset field filters nothing. Built once
/// per request at the parsing boundary and discarded after the query runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring match against title and location.
    pub keyword: Option<String>,
    /// Case-insensitive exact match against the property type tag.
    pub property_type: Option<String>,
    pub purpose: Option<Purpose>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// ">= n" semantics, the UI's "3+" bedrooms.
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub sort: SortBy,
}

impl FilterSpec {
    /// True when no narrowing constraint is set (sort order alone does not
    /// narrow anything).
    pub fn is_unconstrained(&self) -> bool {
        self.keyword.is_none()
            && self.property_type.is_none()
            && self.purpose.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.min_bathrooms.is_none()
    }
}
