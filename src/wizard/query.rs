//! Query composer: wizard answers to per-role catalog predicates
//!
//! Which connector roles are fetched depends on the application type:
//!
//! | application type | roles            |
//! |------------------|------------------|
//! | wire-to-wire     | sockets + tabs   |
//! | wire-to-board    | sockets + headers|
//! | board-to-board   | headers          |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::answers::{ApplicationType, OrientationChoice, WizardAnswers};
use super::state::Step;
use crate::catalog::{CatalogQuery, Gender, Orientation, SortField};
use crate::{GuideError, Result};

/// Physical mating category a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Socket,
    Tab,
    Header,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Socket, Role::Tab, Role::Header];

    /// Catalog gender that identifies this role
    pub fn gender(&self) -> Gender {
        match self {
            Role::Socket => Gender::Female,
            Role::Tab => Gender::Male,
            Role::Header => Gender::Pcb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Socket => "socket",
            Role::Tab => "tab",
            Role::Header => "header",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles fetched for an application type
pub fn roles_for(application_type: ApplicationType) -> &'static [Role] {
    match application_type {
        ApplicationType::WireToWire => &[Role::Socket, Role::Tab],
        ApplicationType::WireToBoard => &[Role::Socket, Role::Header],
        ApplicationType::BoardToBoard => &[Role::Header],
    }
}

/// Equality predicates for one role, without the role's gender
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateSet {
    pub pole_count: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_special_version: Option<bool>,
}

impl PredicateSet {
    /// Full catalog query for a role, ordered by model name
    pub fn to_query(&self, role: Role) -> CatalogQuery {
        let mut query = CatalogQuery::new()
            .gender(role.gender())
            .pole_count(self.pole_count)
            .order_by(SortField::ModelName);
        query.orientation = self.orientation;
        query.is_special_version = self.is_special_version;
        query
    }
}

/// Predicate sets for each role; `None` means the role is not fetched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryPlan {
    pub sockets: Option<PredicateSet>,
    pub tabs: Option<PredicateSet>,
    pub headers: Option<PredicateSet>,
}

impl QueryPlan {
    pub fn get(&self, role: Role) -> Option<&PredicateSet> {
        match role {
            Role::Socket => self.sockets.as_ref(),
            Role::Tab => self.tabs.as_ref(),
            Role::Header => self.headers.as_ref(),
        }
    }

    fn slot(&mut self, role: Role) -> &mut Option<PredicateSet> {
        match role {
            Role::Socket => &mut self.sockets,
            Role::Tab => &mut self.tabs,
            Role::Header => &mut self.headers,
        }
    }

    /// Roles this plan queries, in socket/tab/header order
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.get(*role).is_some())
            .collect()
    }

    pub fn touches(&self, role: Role) -> bool {
        self.get(role).is_some()
    }
}

/// Build the query plan for a complete set of answers
pub fn compose(answers: &WizardAnswers) -> Result<QueryPlan> {
    let application_type = answers
        .application_type
        .ok_or(GuideError::IncompleteAnswers(Step::ApplicationType))?;
    let pole_count = answers
        .pole_count
        .ok_or(GuideError::IncompleteAnswers(Step::PoleCount))?;
    let orientation = answers
        .orientation
        .ok_or(GuideError::IncompleteAnswers(Step::Orientation))?;

    let mut predicates = PredicateSet {
        pole_count: pole_count.get(),
        orientation: catalog_orientation(orientation),
        is_special_version: None,
    };
    apply_refinements(answers, &mut predicates);

    let mut plan = QueryPlan::default();
    for role in roles_for(application_type) {
        *plan.slot(*role) = Some(predicates.clone());
    }
    Ok(plan)
}

/// Map the user's choice onto the catalog's stored spelling
fn catalog_orientation(choice: OrientationChoice) -> Option<Orientation> {
    match choice {
        OrientationChoice::Horizontal => Some(Orientation::Horizontal),
        OrientationChoice::Vertical => Some(Orientation::Vertical),
        OrientationChoice::Either => None,
    }
}

/// Optional step-4 refinements.
///
/// `requires_locking` and `specific_keying` are collected but the catalog has
/// no columns for them, so they add no predicates here.
fn apply_refinements(answers: &WizardAnswers, predicates: &mut PredicateSet) {
    if answers.special_version {
        predicates.is_special_version = Some(true);
    }
}
