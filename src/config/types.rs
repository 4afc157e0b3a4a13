use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::DEFAULT_LOCALE;

/// Root settings file structure (`config.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display locale, one of the embedded bundles
    pub locale: String,

    /// Directory holding `<locale>.yaml` string overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<PathBuf>,

    /// Where connector records come from
    pub catalog: CatalogSource,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            locales_dir: None,
            catalog: CatalogSource::default(),
        }
    }
}

/// Catalog backend selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogSource {
    /// YAML or JSON export of the connector table
    File { path: PathBuf },
    /// Hosted PostgREST endpoint
    Remote(RemoteCatalogConfig),
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File {
            path: PathBuf::from("catalog.yaml"),
        }
    }
}

/// Hosted catalog connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCatalogConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,

    #[serde(default = "default_table")]
    pub table: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_table() -> String {
    "connectors".to_string()
}

fn default_api_key_env() -> String {
    "SUPABASE_ANON_KEY".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}
