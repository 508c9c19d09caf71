use property_search::catalog::{CatalogSnapshot, CatalogSource, FileCatalog};
use property_search::models::{Property, Purpose};
use property_search::query::{filter_properties, parse_query};

fn fixture_catalog() -> Vec<Property> {
    vec![
        Property {
            id: "a1".to_string(),
            title: "1 Kanal House".to_string(),
            location: "DHA Phase 5, Lahore".to_string(),
            price: 95_000_000,
            purpose: Purpose::ForSale,
            property_type: "house".to_string(),
            bedrooms: 5,
            bathrooms: 6,
            area: 4500.0,
        },
        Property {
            id: "a2".to_string(),
            title: "Furnished Apartment".to_string(),
            location: "Gulberg III, Lahore".to_string(),
            price: 120_000,
            purpose: Purpose::ForRent,
            property_type: "apartment".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            area: 1100.0,
        },
        Property {
            id: "a3".to_string(),
            title: "Studio Apartment".to_string(),
            location: "Blue Area, Islamabad".to_string(),
            price: 65_000,
            purpose: Purpose::ForRent,
            property_type: "apartment".to_string(),
            bedrooms: 1,
            bathrooms: 1,
            area: 550.0,
        },
    ]
}

#[tokio::test]
async fn snapshot_roundtrip_feeds_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    CatalogSnapshot::new(fixture_catalog())
        .save(&path)
        .await
        .unwrap();

    let properties = FileCatalog::new(&path).fetch().await.unwrap();
    assert_eq!(properties.len(), 3);

    let spec = parse_query("purpose=rent&property_type=apartment&sort=price_low_high").unwrap();
    let result = filter_properties(&properties, &spec).unwrap();

    assert_eq!(result.count, 2);
    assert_eq!(result.matches[0].id, "a3");
    assert_eq!(result.matches[1].id, "a2");
    assert_eq!(result.summary, "Apartment Properties for Rent");
}

#[tokio::test]
async fn file_catalog_accepts_bare_property_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.json");

    let json = serde_json::to_string_pretty(&fixture_catalog()).unwrap();
    tokio::fs::write(&path, json).await.unwrap();

    let properties = FileCatalog::new(&path).fetch().await.unwrap();
    assert_eq!(properties.len(), 3);

    let spec = parse_query("keyword=lahore").unwrap();
    let result = filter_properties(&properties, &spec).unwrap();
    assert_eq!(result.count, 2);
}

#[tokio::test]
async fn file_catalog_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{not json").await.unwrap();

    assert!(FileCatalog::new(&path).fetch().await.is_err());
}
