//! Settings for the guide: catalog source, locale, string overrides

pub mod loader;
pub mod types;

pub use loader::{SettingsLoader, CATALOG_ENV, LOCALE_ENV};
pub use types::{CatalogSource, RemoteCatalogConfig, Settings};
