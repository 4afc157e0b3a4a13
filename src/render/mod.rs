//! Result renderer
//!
//! [`ResultsView::project`] is the whole of the rendering logic: a pure
//! projection of the result set and loading flag. The text renderer here and
//! the TUI results screen only lay the view out.

mod text;

pub use text::{render_detail, render_results};

use crate::catalog::ConnectorRecord;
use crate::wizard::{ResultSet, Role};

/// One non-empty result partition
#[derive(Debug, Clone, PartialEq)]
pub struct RoleGroup<'a> {
    pub role: Role,
    pub records: &'a [ConnectorRecord],
}

impl RoleGroup<'_> {
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// What the results step shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView<'a> {
    /// A fetch is in flight
    Loading,
    /// Every partition is empty; the user is offered a restart
    NoResults,
    /// Non-empty partitions in socket/tab/header order
    Groups(Vec<RoleGroup<'a>>),
}

impl<'a> ResultsView<'a> {
    pub fn project(results: &'a ResultSet, loading: bool) -> Self {
        if loading {
            return ResultsView::Loading;
        }
        if results.is_empty() {
            return ResultsView::NoResults;
        }

        ResultsView::Groups(
            Role::ALL
                .into_iter()
                .map(|role| RoleGroup {
                    role,
                    records: results.get(role),
                })
                .filter(|group| !group.records.is_empty())
                .collect(),
        )
    }

    /// Whether the view offers the restart action
    pub fn offers_reset(&self) -> bool {
        matches!(self, ResultsView::NoResults)
    }
}

/// Localization key for a role's group heading
pub fn role_label_key(role: Role) -> &'static str {
    match role {
        Role::Socket => "guide.roles.socket",
        Role::Tab => "guide.roles.tab",
        Role::Header => "guide.roles.header",
    }
}
