pub mod query;
pub mod show;

#[cfg(feature = "tui")]
pub mod guide;

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::catalog::{Catalog, MemoryCatalog};
use crate::config::{CatalogSource, Settings};
use crate::i18n::Localizer;
use crate::{GuideError, Result};

/// Everything a command needs: settings, catalog and strings
#[derive(Clone)]
pub struct GuideContext {
    pub settings: Settings,
    pub catalog: Arc<dyn Catalog>,
    pub localizer: Localizer,
}

impl GuideContext {
    /// Open the configured catalog and load the locale bundle
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let catalog = open_catalog(&settings.catalog)?;
        let localizer = localizer_for(&settings, &settings.locale)?;
        Ok(Self {
            settings,
            catalog,
            localizer,
        })
    }

    /// Build a context around an already-open catalog
    pub fn with_catalog(settings: Settings, catalog: Arc<dyn Catalog>) -> Result<Self> {
        let localizer = localizer_for(&settings, &settings.locale)?;
        Ok(Self {
            settings,
            catalog,
            localizer,
        })
    }
}

/// Localizer for `locale`, with the configured overrides applied
pub fn localizer_for(settings: &Settings, locale: &str) -> Result<Localizer> {
    let localizer = Localizer::new(locale)?;
    match &settings.locales_dir {
        Some(dir) => localizer.with_overrides(dir),
        None => Ok(localizer),
    }
}

fn open_catalog(source: &CatalogSource) -> Result<Arc<dyn Catalog>> {
    match source {
        CatalogSource::File { path } => {
            let catalog = MemoryCatalog::load(path)?;
            info!(
                "Opened catalog {} ({} records)",
                path.display(),
                catalog.len()
            );
            Ok(Arc::new(catalog))
        }
        #[cfg(feature = "remote")]
        CatalogSource::Remote(remote) => {
            let catalog = crate::catalog::RestCatalog::new(remote)?;
            info!("Using remote catalog {}", remote.url);
            Ok(Arc::new(catalog))
        }
        #[cfg(not(feature = "remote"))]
        CatalogSource::Remote(_) => Err(GuideError::Config(
            "Remote catalogs require building with the `remote` feature".to_string(),
        )),
    }
}

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Execute the command, writing user-facing output to `out`
    async fn execute(&self, ctx: &GuideContext, out: &mut (dyn Write + Send)) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

pub(crate) fn write_output(out: &mut (dyn Write + Send), text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).map_err(GuideError::Io)?;
    out.flush().map_err(GuideError::Io)
}
