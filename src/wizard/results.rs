//! Per-run result partitions

use serde::Serialize;

use super::query::Role;
use crate::catalog::ConnectorRecord;

/// Connectors found for one wizard run, partitioned by role
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub sockets: Vec<ConnectorRecord>,
    pub tabs: Vec<ConnectorRecord>,
    pub headers: Vec<ConnectorRecord>,
}

impl ResultSet {
    pub fn get(&self, role: Role) -> &[ConnectorRecord] {
        match role {
            Role::Socket => &self.sockets,
            Role::Tab => &self.tabs,
            Role::Header => &self.headers,
        }
    }

    pub fn set(&mut self, role: Role, records: Vec<ConnectorRecord>) {
        match role {
            Role::Socket => self.sockets = records,
            Role::Tab => self.tabs = records,
            Role::Header => self.headers = records,
        }
    }

    /// True when all three partitions are empty
    pub fn is_empty(&self) -> bool {
        self.sockets.is_empty() && self.tabs.is_empty() && self.headers.is_empty()
    }

    pub fn total(&self) -> usize {
        self.sockets.len() + self.tabs.len() + self.headers.len()
    }

    pub fn clear(&mut self) {
        self.sockets.clear();
        self.tabs.clear();
        self.headers.clear();
    }
}
