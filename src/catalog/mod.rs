mod file;
mod rest;
mod snapshot;
mod traits;

pub use file::FileCatalog;
pub use rest::RestCatalog;
pub use snapshot::CatalogSnapshot;
pub use traits::CatalogSource;
