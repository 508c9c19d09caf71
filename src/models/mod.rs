use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Whether a listing is offered for sale or for rent.
///
/// The catalog feed is inconsistent about this tag: sale listings arrive as
/// "Sale" or "Buy" (any case), rentals as "Rent". Everything is mapped to
/// this canonical enum at the deserialization boundary so no raw string
/// comparison ever happens inside the query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    ForSale,
    ForRent,
}

impl Purpose {
    /// Canonical catalog tag, used when serializing back out.
    pub fn as_catalog_tag(&self) -> &'static str {
        match self {
            Purpose::ForSale => "Sale",
            Purpose::ForRent => "Rent",
        }
    }

    /// Human-readable phrase for search summaries ("for Sale" / "for Rent").
    pub fn summary_phrase(&self) -> &'static str {
        match self {
            Purpose::ForSale => "for Sale",
            Purpose::ForRent => "for Rent",
        }
    }
}

impl FromStr for Purpose {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sale" | "buy" => Ok(Purpose::ForSale),
            "rent" => Ok(Purpose::ForRent),
            other => bail!("unknown purpose value: {:?}", other),
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_catalog_tag())
    }
}

impl Serialize for Purpose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_catalog_tag())
    }
}

impl<'de> Deserialize<'de> for Purpose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// One listing from the property catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Currency-agnostic amount; the feed carries whole units only.
    pub price: i64,
    pub purpose: Purpose,
    /// Open-ended tag ("house", "apartment", "plot", ...), not a closed set.
    #[serde(rename = "propertyType")]
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square feet.
    pub area: f64,
}

impl Property {
    /// Checks the catalog contract for one record.
    ///
    /// A record that violates it is a hard error rather than something to
    /// skip quietly, otherwise result counts and summaries drift out of
    /// sync with what was actually searched.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            bail!("property with empty id");
        }
        if self.title.is_empty() {
            bail!("property {}: empty title", self.id);
        }
        if self.price < 0 {
            bail!("property {}: negative price {}", self.id, self.price);
        }
        if !(self.area > 0.0) {
            bail!("property {}: non-positive area {}", self.id, self.area);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Property {
        Property {
            id: "p1".to_string(),
            title: "3 Bed Apartment".to_string(),
            location: "Gulberg III, Lahore".to_string(),
            price: 18_500_000,
            purpose: Purpose::ForSale,
            property_type: "apartment".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            area: 1450.0,
        }
    }

    #[test]
    fn purpose_accepts_every_feed_variant() {
        for raw in ["sale", "Sale", "buy", "Buy", "BUY"] {
            assert_eq!(raw.parse::<Purpose>().unwrap(), Purpose::ForSale);
        }
        for raw in ["rent", "Rent", "RENT"] {
            assert_eq!(raw.parse::<Purpose>().unwrap(), Purpose::ForRent);
        }
        assert!("lease".parse::<Purpose>().is_err());
    }

    #[test]
    fn purpose_roundtrips_through_json_canonically() {
        let p: Purpose = serde_json::from_str("\"Buy\"").unwrap();
        assert_eq!(p, Purpose::ForSale);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"Sale\"");
    }

    #[test]
    fn property_deserializes_from_feed_shape() {
        let json = r#"{
            "id": "42",
            "title": "Corner Plot",
            "location": "DHA Phase 5, Lahore",
            "price": 9500000,
            "purpose": "buy",
            "propertyType": "plot",
            "bedrooms": 0,
            "bathrooms": 0,
            "area": 2722.5
        }"#;
        let p: Property = serde_json::from_str(json).unwrap();
        assert_eq!(p.purpose, Purpose::ForSale);
        assert_eq!(p.bedrooms, 0);
        p.validate().unwrap();
    }

    #[test]
    fn validate_rejects_broken_records() {
        let mut p = sample();
        p.price = -1;
        assert!(p.validate().is_err());

        let mut p = sample();
        p.area = 0.0;
        assert!(p.validate().is_err());

        let mut p = sample();
        p.id.clear();
        assert!(p.validate().is_err());
    }
}
