use anyhow::{Context, Result};
use tracing::warn;
use urlencoding::decode;

use crate::query::filter::FilterSpec;

/// Parses a URL-style query string into a [`FilterSpec`].
///
/// This is the strict half of the boundary: numeric fields must parse as
/// numbers and enumerated fields must belong to their closed sets, or the
/// whole parse fails. The engine downstream never sees a raw string twice.
/// Empty values mean "not set". Keys the search layer does not own (page
/// numbers, UI state) are logged and skipped.
pub fn parse_query(raw: &str) -> Result<FilterSpec> {
    let mut spec = FilterSpec::default();

    for pair in raw.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(key).with_context(|| format!("malformed query key {:?}", key))?;
        let value = decode(value).with_context(|| format!("malformed value for {:?}", key))?;
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key.as_ref() {
            "keyword" => spec.keyword = Some(value.to_string()),
            "property_type" | "propertyType" => spec.property_type = Some(value.to_string()),
            "purpose" => {
                spec.purpose = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid purpose {:?}", value))?,
                )
            }
            "min_price" | "minPrice" => spec.min_price = Some(parse_number(&key, value)?),
            "max_price" | "maxPrice" => spec.max_price = Some(parse_number(&key, value)?),
            "min_bedrooms" | "minBedrooms" => {
                spec.min_bedrooms = Some(parse_number(&key, value)?)
            }
            "min_bathrooms" | "minBathrooms" => {
                spec.min_bathrooms = Some(parse_number(&key, value)?)
            }
            "sort" | "sortBy" => {
                spec.sort = value
                    .parse()
                    .with_context(|| format!("invalid sort {:?}", value))?
            }
            other => warn!("ignoring unrecognized query parameter {:?}", other),
        }
    }

    Ok(spec)
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .ok()
        .with_context(|| format!("{} must be a number, got {:?}", key, value))
}
