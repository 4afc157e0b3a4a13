//! In-process catalog backed by a YAML or JSON export of the connector table

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{Catalog, CatalogQuery, ConnectorRecord, SortField};

/// Catalog file layout: either a bare list or `{ connectors: [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { connectors: Vec<ConnectorRecord> },
    Bare(Vec<ConnectorRecord>),
}

impl From<CatalogFile> for Vec<ConnectorRecord> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Wrapped { connectors } => connectors,
            CatalogFile::Bare(records) => records,
        }
    }
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    records: Vec<ConnectorRecord>,
}

impl MemoryCatalog {
    pub fn new(records: Vec<ConnectorRecord>) -> Self {
        Self { records }
    }

    /// Load records from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file: CatalogFile = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?
        } else {
            serde_yaml_ng::from_str(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?
        };

        let records: Vec<ConnectorRecord> = file.into();
        debug!(
            "Loaded {} connector records from {}",
            records.len(),
            path.display()
        );
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn query(&self, query: &CatalogQuery) -> Result<Vec<ConnectorRecord>> {
        let mut matched: Vec<ConnectorRecord> = self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();

        match query.order_by {
            SortField::ModelName => matched.sort_by(|a, b| a.model_name.cmp(&b.model_name)),
            SortField::Id => matched.sort_by_key(|record| record.id),
        }

        Ok(matched)
    }

    async fn get(&self, id: i64) -> Result<Option<ConnectorRecord>> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Gender, Orientation};
    use std::io::Write;

    const CATALOG_YAML: &str = r#"
connectors:
  - id: 3
    model_name: "Socket B"
    gender: Female
    pole_count: 4
    orientation: Horizontal
  - id: 1
    model_name: "Socket A"
    gender: Female
    pole_count: 4
    orientation: Horizontal
    is_special_version: true
  - id: 2
    model_name: "Header A"
    gender: PCB
    pole_count: 4
    orientation: Vertical
"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_query_filters_and_orders_by_model_name() {
        let file = write_temp(".yaml", CATALOG_YAML);
        let catalog = MemoryCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        let sockets = catalog
            .query(
                &CatalogQuery::new()
                    .gender(Gender::Female)
                    .pole_count(4)
                    .orientation(Orientation::Horizontal),
            )
            .await
            .unwrap();

        let names: Vec<_> = sockets.iter().map(|r| r.model_name.as_str()).collect();
        assert_eq!(names, vec!["Socket A", "Socket B"]);
    }

    #[tokio::test]
    async fn test_special_version_filter() {
        let file = write_temp(".yml", CATALOG_YAML);
        let catalog = MemoryCatalog::load(file.path()).unwrap();

        let special = catalog
            .query(&CatalogQuery::new().special_version(true))
            .await
            .unwrap();
        assert_eq!(special.len(), 1);
        assert_eq!(special[0].id, 1);
    }

    #[tokio::test]
    async fn test_load_bare_json_list() {
        let json = r#"[{"id": 9, "model_name": "Tab", "gender": "Male", "pole_count": 2}]"#;
        let file = write_temp(".json", json);
        let catalog = MemoryCatalog::load(file.path()).unwrap();

        let record = catalog.get(9).await.unwrap().unwrap();
        assert_eq!(record.gender, Gender::Male);
        assert!(catalog.get(10).await.unwrap().is_none());
    }

    #[test]
    fn test_load_reports_path_on_parse_failure() {
        let file = write_temp(".yaml", "connectors: [ {id: oops} ]");
        let err = MemoryCatalog::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }
}
