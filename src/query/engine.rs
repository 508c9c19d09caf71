use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::models::Property;
use crate::query::filter::{FilterSpec, SortBy};

/// Outcome of one search: the matching listings in display order, a
/// human-readable description of what was searched, and the match count.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub matches: Vec<Property>,
    pub summary: String,
    pub count: usize,
}

/// Runs one search over an already-fetched catalog.
///
/// Pure and deterministic: no I/O, no shared state, identical inputs give
/// identical output. Contradictory bounds (min above max) simply match
/// nothing; the only error is a catalog record that breaks its contract,
/// which fails the whole query rather than being skipped.
pub fn filter_properties(properties: &[Property], spec: &FilterSpec) -> Result<QueryResult> {
    for property in properties {
        property
            .validate()
            .context("catalog contract violated")?;
    }

    let mut matches: Vec<Property> = properties
        .iter()
        .filter(|p| matches_spec(p, spec))
        .cloned()
        .collect();

    sort_matches(&mut matches, spec.sort);

    let summary = compose_summary(spec);
    debug!(
        "query matched {} of {} properties ({})",
        matches.len(),
        properties.len(),
        summary
    );

    Ok(QueryResult {
        count: matches.len(),
        summary,
        matches,
    })
}

fn matches_spec(property: &Property, spec: &FilterSpec) -> bool {
    if let Some(keyword) = spec.keyword.as_deref() {
        if !keyword.is_empty() {
            let needle = keyword.to_lowercase();
            let in_title = property.title.to_lowercase().contains(&needle);
            let in_location = property.location.to_lowercase().contains(&needle);
            if !in_title && !in_location {
                return false;
            }
        }
    }

    if let Some(ptype) = spec.property_type.as_deref() {
        if !ptype.is_empty() && !property.property_type.eq_ignore_ascii_case(ptype) {
            return false;
        }
    }

    if let Some(purpose) = spec.purpose {
        if property.purpose != purpose {
            return false;
        }
    }

    // A zero minimum is the UI's "any" option, not a constraint.
    if let Some(min_price) = spec.min_price {
        if min_price > 0 && property.price < min_price {
            return false;
        }
    }

    if let Some(max_price) = spec.max_price {
        if property.price > max_price {
            return false;
        }
    }

    if let Some(min_bedrooms) = spec.min_bedrooms {
        if min_bedrooms > 0 && property.bedrooms < min_bedrooms {
            return false;
        }
    }

    if let Some(min_bathrooms) = spec.min_bathrooms {
        if min_bathrooms > 0 && property.bathrooms < min_bathrooms {
            return false;
        }
    }

    true
}

/// The catalog carries no timestamp, it is delivered newest-first. "Newest"
/// therefore keeps feed order and "oldest" reverses it; the price sorts are
/// stable so equal prices also keep feed order.
fn sort_matches(matches: &mut [Property], sort: SortBy) {
    match sort {
        SortBy::Newest => {}
        SortBy::Oldest => matches.reverse(),
        SortBy::PriceLowHigh => matches.sort_by_key(|p| p.price),
        SortBy::PriceHighLow => matches.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

/// Builds the summary line, e.g. `Apartment Properties for Rent matching
/// "downtown"`. Always non-empty; with no filters set it is just
/// "Properties".
fn compose_summary(spec: &FilterSpec) -> String {
    let mut summary = String::from("Properties");

    if let Some(ptype) = spec.property_type.as_deref() {
        if !ptype.is_empty() {
            summary = format!("{} {}", capitalize(ptype), summary);
        }
    }

    if let Some(purpose) = spec.purpose {
        summary.push(' ');
        summary.push_str(purpose.summary_phrase());
    }

    if let Some(keyword) = spec.keyword.as_deref() {
        if !keyword.is_empty() {
            summary.push_str(&format!(" matching \"{}\"", keyword));
        }
    }

    summary
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
