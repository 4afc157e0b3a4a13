//! Result fetcher: runs a query plan against the catalog

use std::sync::Arc;

use futures::future;
use serde::Serialize;
use tracing::{debug, warn};

use super::query::{QueryPlan, Role};
use super::results::ResultSet;
use crate::catalog::{Catalog, ConnectorRecord};

/// Outcome of one fetch. Failed roles are already empty in `results`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchOutcome {
    pub results: ResultSet,
    pub failed_roles: Vec<Role>,
}

impl FetchOutcome {
    pub fn is_partial_failure(&self) -> bool {
        !self.failed_roles.is_empty()
    }
}

enum RoleResult {
    Skipped,
    Found(Vec<ConnectorRecord>),
    Failed,
}

/// Executes query plans against an injected catalog
#[derive(Clone)]
pub struct ResultFetcher {
    catalog: Arc<dyn Catalog>,
}

impl ResultFetcher {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<dyn Catalog> {
        &self.catalog
    }

    /// Run every role query in the plan concurrently and wait for all of them.
    ///
    /// A failing query leaves its partition empty; it never fails the fetch.
    pub async fn fetch(&self, plan: &QueryPlan) -> FetchOutcome {
        let (sockets, tabs, headers) = future::join3(
            self.fetch_role(plan, Role::Socket),
            self.fetch_role(plan, Role::Tab),
            self.fetch_role(plan, Role::Header),
        )
        .await;

        let mut outcome = FetchOutcome::default();
        for (role, result) in [
            (Role::Socket, sockets),
            (Role::Tab, tabs),
            (Role::Header, headers),
        ] {
            match result {
                RoleResult::Skipped => {}
                RoleResult::Found(records) => outcome.results.set(role, records),
                RoleResult::Failed => outcome.failed_roles.push(role),
            }
        }

        debug!(
            backend = self.catalog.name(),
            total = outcome.results.total(),
            failed = outcome.failed_roles.len(),
            "Fetch complete"
        );
        outcome
    }

    async fn fetch_role(&self, plan: &QueryPlan, role: Role) -> RoleResult {
        let Some(predicates) = plan.get(role) else {
            return RoleResult::Skipped;
        };

        match self.catalog.query(&predicates.to_query(role)).await {
            Ok(records) => {
                debug!(role = %role, count = records.len(), "Role query returned");
                RoleResult::Found(records)
            }
            Err(e) => {
                warn!(role = %role, error = %e, "Catalog query failed; showing no {}s", role);
                RoleResult::Failed
            }
        }
    }
}
