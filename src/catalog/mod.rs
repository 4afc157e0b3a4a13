//! Connector catalog - read-only access to connector parts
//!
//! The wizard never writes to the catalog. It issues equality-filtered
//! queries through the [`Catalog`] trait, which is injected so the backing
//! store can be swapped:
//!
//! ```text
//! Wizard ── QueryPlan ──▶ ResultFetcher ── CatalogQuery ──▶ dyn Catalog
//!                                                            │
//!                                  ┌─────────────────────────┤
//!                                  ▼                         ▼
//!                            MemoryCatalog             RestCatalog
//!                          (YAML/JSON file)     (PostgREST, feature `remote`)
//! ```

mod memory;
#[cfg(feature = "remote")]
mod remote;

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use memory::MemoryCatalog;
#[cfg(feature = "remote")]
pub use remote::RestCatalog;

/// Mating gender as stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[serde(rename = "PCB")]
    Pcb,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Pcb => "PCB",
        }
    }
}

/// Mounting orientation as stored in the catalog.
///
/// Stored values are capitalized (`Horizontal`, `Vertical`); this enum's
/// serialization is the contract with the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A physical connector part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorRecord {
    pub id: i64,
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub gender: Gender,
    pub pole_count: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default)]
    pub is_special_version: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Display field used to order query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    ModelName,
    Id,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::ModelName => "model_name",
            SortField::Id => "id",
        }
    }
}

/// Equality-filtered catalog query. Unset filters match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub gender: Option<Gender>,
    pub pole_count: Option<u8>,
    pub orientation: Option<Orientation>,
    pub is_special_version: Option<bool>,
    pub order_by: SortField,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn pole_count(mut self, pole_count: u8) -> Self {
        self.pole_count = Some(pole_count);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn special_version(mut self, is_special_version: bool) -> Self {
        self.is_special_version = Some(is_special_version);
        self
    }

    pub fn order_by(mut self, field: SortField) -> Self {
        self.order_by = field;
        self
    }

    /// Check whether a record satisfies every set filter
    pub fn matches(&self, record: &ConnectorRecord) -> bool {
        self.gender.map_or(true, |g| record.gender == g)
            && self.pole_count.map_or(true, |n| record.pole_count == n)
            && self
                .orientation
                .map_or(true, |o| record.orientation == Some(o))
            && self
                .is_special_version
                .map_or(true, |s| record.is_special_version == s)
    }

    /// Render the query as PostgREST parameters (`column=eq.value`, `order=...`)
    pub fn to_rest_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];
        if let Some(gender) = self.gender {
            params.push(("gender", format!("eq.{}", gender.as_str())));
        }
        if let Some(pole_count) = self.pole_count {
            params.push(("pole_count", format!("eq.{pole_count}")));
        }
        if let Some(orientation) = self.orientation {
            params.push(("orientation", format!("eq.{}", orientation.as_str())));
        }
        if let Some(special) = self.is_special_version {
            params.push(("is_special_version", format!("eq.{special}")));
        }
        params.push(("order", format!("{}.asc", self.order_by.column())));
        params
    }
}

/// Read-only catalog of connector parts
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Return all records matching the query, in the query's sort order
    async fn query(&self, query: &CatalogQuery) -> Result<Vec<ConnectorRecord>>;

    /// Look up a single record by id
    async fn get(&self, id: i64) -> Result<Option<ConnectorRecord>>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(gender: Gender, orientation: Option<Orientation>) -> ConnectorRecord {
        ConnectorRecord {
            id: 1,
            model_name: "X".into(),
            series: None,
            gender,
            pole_count: 4,
            orientation,
            is_special_version: false,
            media_url: None,
            description: None,
        }
    }

    #[test]
    fn test_unset_filters_match_everything() {
        let query = CatalogQuery::new();
        assert!(query.matches(&record(Gender::Pcb, None)));
        assert!(query.matches(&record(Gender::Female, Some(Orientation::Vertical))));
    }

    #[test]
    fn test_orientation_filter_rejects_unknown_orientation() {
        let query = CatalogQuery::new().orientation(Orientation::Horizontal);
        assert!(!query.matches(&record(Gender::Male, None)));
        assert!(query.matches(&record(Gender::Male, Some(Orientation::Horizontal))));
    }

    #[test]
    fn test_rest_params() {
        let query = CatalogQuery::new()
            .gender(Gender::Pcb)
            .pole_count(6)
            .orientation(Orientation::Vertical)
            .special_version(true);

        assert_eq!(
            query.to_rest_params(),
            vec![
                ("select", "*".to_string()),
                ("gender", "eq.PCB".to_string()),
                ("pole_count", "eq.6".to_string()),
                ("orientation", "eq.Vertical".to_string()),
                ("is_special_version", "eq.true".to_string()),
                ("order", "model_name.asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_record_uses_stored_spelling() {
        let yaml = r#"
id: 7
model_name: "MQS 2.8 Socket"
gender: PCB
pole_count: 2
orientation: Horizontal
"#;
        let record: ConnectorRecord = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(record.gender, Gender::Pcb);
        assert_eq!(record.orientation, Some(Orientation::Horizontal));
        assert!(!record.is_special_version);
    }
}
