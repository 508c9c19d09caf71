use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use property_search::catalog::{CatalogSnapshot, CatalogSource, FileCatalog, RestCatalog};
use property_search::query::{filter_properties, parse_query};

/// Search a property catalog from the command line.
#[derive(Debug, Parser)]
#[command(name = "property-search", version)]
struct Args {
    /// Filter as a URL query string, e.g. "purpose=rent&min_bedrooms=2&sort=price_low_high"
    #[arg(short, long, default_value = "")]
    query: String,

    /// Base URL of the listing API to fetch the catalog from
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Local JSON catalog file (a saved snapshot or a bare property array)
    #[arg(long, default_value = "properties.json")]
    file: PathBuf,

    /// Show at most this many results (display only, the full count is still reported)
    #[arg(long)]
    limit: Option<usize>,

    /// Save the fetched catalog as a snapshot for later offline searches
    #[arg(long)]
    save: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();

    let source: Box<dyn CatalogSource> = match &args.url {
        Some(url) => Box::new(RestCatalog::new(url.clone())?),
        None => Box::new(FileCatalog::new(args.file.clone())),
    };

    info!("Loading property catalog from {}...", source.source_name());
    let properties = source.fetch().await?;
    info!("Loaded {} properties", properties.len());

    if let Some(path) = &args.save {
        CatalogSnapshot::new(properties.clone()).save(path).await?;
    }

    let spec = parse_query(&args.query)?;
    let result = filter_properties(&properties, &spec)?;

    info!("{}: {} match(es)", result.summary, result.count);
    info!("");

    let shown = args.limit.unwrap_or(result.matches.len());
    for (i, property) in result.matches.iter().take(shown).enumerate() {
        println!(
            "{}. {} ({} {})",
            i + 1,
            property.title,
            property.price,
            property.purpose
        );
        println!("   {}", property.location);
        println!(
            "   {} | {} bed, {} bath | {} sqft",
            property.property_type, property.bedrooms, property.bathrooms, property.area
        );
        println!("   ID: {}", property.id);
        println!();
    }

    if shown < result.count {
        info!("Showing {} of {} matches", shown, result.count);
    }

    Ok(())
}
