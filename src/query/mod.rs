pub mod engine;
pub mod filter;
pub mod params;

pub use engine::{filter_properties, QueryResult};
pub use filter::{FilterSpec, SortBy};
pub use params::parse_query;
