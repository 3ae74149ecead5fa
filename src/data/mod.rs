mod catalog;
mod scenarios;

pub use catalog::{Catalog, CatalogSummary};
pub use scenarios::default_scenarios;
