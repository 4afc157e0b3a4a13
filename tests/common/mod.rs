//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use connector_guide::catalog::{
    Catalog, CatalogQuery, ConnectorRecord, Gender, MemoryCatalog, Orientation,
};

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn record(
    id: i64,
    model_name: &str,
    gender: Gender,
    pole_count: u8,
    orientation: Orientation,
) -> ConnectorRecord {
    ConnectorRecord {
        id,
        model_name: model_name.to_string(),
        series: Some("ClipStar".to_string()),
        gender,
        pole_count,
        orientation: Some(orientation),
        is_special_version: false,
        media_url: None,
        description: None,
    }
}

/// A small catalog covering every gender at 4 poles
pub fn sample_records() -> Vec<ConnectorRecord> {
    let mut special = record(4, "CS-4F-S", Gender::Female, 4, Orientation::Horizontal);
    special.is_special_version = true;

    vec![
        record(2, "CS-4F", Gender::Female, 4, Orientation::Horizontal),
        record(1, "CS-4F-V", Gender::Female, 4, Orientation::Vertical),
        special,
        record(3, "CS-2F", Gender::Female, 2, Orientation::Horizontal),
        record(10, "CT-4M", Gender::Male, 4, Orientation::Horizontal),
        record(11, "CT-6M", Gender::Male, 6, Orientation::Vertical),
        record(20, "PH-4", Gender::Pcb, 4, Orientation::Horizontal),
        record(21, "PH-4-V", Gender::Pcb, 4, Orientation::Vertical),
    ]
}

pub fn sample_catalog() -> MemoryCatalog {
    MemoryCatalog::new(sample_records())
}

/// Catalog wrapper that fails queries for chosen genders and records every query
pub struct FakeCatalog {
    inner: MemoryCatalog,
    failing: HashSet<Gender>,
    calls: AtomicUsize,
    queries: Mutex<Vec<CatalogQuery>>,
}

impl FakeCatalog {
    pub fn new(records: Vec<ConnectorRecord>) -> Self {
        Self {
            inner: MemoryCatalog::new(records),
            failing: HashSet::new(),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_for(mut self, gender: Gender) -> Self {
        self.failing.insert(gender);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn queried_genders(&self) -> Vec<Gender> {
        let mut genders: Vec<Gender> = self
            .queries()
            .into_iter()
            .filter_map(|q| q.gender)
            .collect();
        genders.sort_by_key(|g| g.as_str());
        genders
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn query(&self, query: &CatalogQuery) -> Result<Vec<ConnectorRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        if let Some(gender) = query.gender {
            if self.failing.contains(&gender) {
                return Err(anyhow!("connection reset while querying {}", gender.as_str()));
            }
        }
        self.inner.query(query).await
    }

    async fn get(&self, id: i64) -> Result<Option<ConnectorRecord>> {
        self.inner.get(id).await
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
