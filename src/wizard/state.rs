//! Wizard state machine and step validation
//!
//! ```text
//! ApplicationType ─▶ PoleCount ─▶ Orientation ─▶ Refinements ─[fetch]─▶ Results
//!        ▲                                                               │
//!        └─────────────────────────── reset ─────────────────────────────┘
//! ```
//!
//! Leaving `Refinements` starts a fetch instead of moving immediately; the
//! step changes to `Results` once the matching [`WizardState::complete_fetch`]
//! arrives. Each fetch carries a generation number so a response that lands
//! after the user went back or restarted is dropped.

use std::fmt;

use tracing::{debug, warn};

use super::answers::{AnswersPatch, WizardAnswers};
use super::fetch::FetchOutcome;
use super::query::{self, QueryPlan, Role};
use super::results::ResultSet;

/// Wizard steps, numbered 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    ApplicationType,
    PoleCount,
    Orientation,
    Refinements,
    Results,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::ApplicationType,
        Step::PoleCount,
        Step::Orientation,
        Step::Refinements,
        Step::Results,
    ];

    /// 1-based step number
    pub fn index(&self) -> usize {
        match self {
            Step::ApplicationType => 1,
            Step::PoleCount => 2,
            Step::Orientation => 3,
            Step::Refinements => 4,
            Step::Results => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn next(&self) -> Step {
        Step::from_index(self.index() + 1).unwrap_or(Step::Results)
    }

    pub fn previous(&self) -> Step {
        Step::from_index(self.index().saturating_sub(1)).unwrap_or(Step::ApplicationType)
    }

    /// Localization key of the step title
    pub fn title_key(&self) -> String {
        format!("guide.steps.{}.title", self.index())
    }

    /// Icon shown next to the step title
    pub fn icon(&self) -> &'static str {
        const ICONS: [&str; 5] = ["🔌", "🔢", "↔", "⚙", "📋"];
        ICONS[self.index() - 1]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::ApplicationType => "application type",
            Step::PoleCount => "pole count",
            Step::Orientation => "orientation",
            Step::Refinements => "refinements",
            Step::Results => "results",
        };
        f.write_str(name)
    }
}

/// Work the caller must do to finish leaving the refinements step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub plan: QueryPlan,
}

/// Result of [`WizardState::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Current step is not valid, already on results, or a fetch is in flight
    Blocked,
    /// Moved forward to the given step
    Moved(Step),
    /// Results must be fetched; the step stays put until the outcome arrives
    Fetch(FetchTicket),
}

/// Current step, answers and results of one wizard instance
#[derive(Debug, Clone)]
pub struct WizardState {
    step: Step,
    answers: WizardAnswers,
    results: ResultSet,
    failed_roles: Vec<Role>,
    loading: bool,
    generation: u64,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::ApplicationType,
            answers: WizardAnswers::default(),
            results: ResultSet::default(),
            failed_roles: Vec::new(),
            loading: false,
            generation: 0,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &WizardAnswers {
        &self.answers
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Roles whose query failed in the last applied fetch
    pub fn failed_roles(&self) -> &[Role] {
        &self.failed_roles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the answers allow leaving `step` forward
    pub fn is_step_valid(&self, step: Step) -> bool {
        match step {
            Step::ApplicationType => self.answers.application_type.is_some(),
            Step::PoleCount => self.answers.pole_count.is_some(),
            Step::Orientation => self.answers.orientation.is_some(),
            Step::Refinements => true,
            Step::Results => false,
        }
    }

    /// Whether a "Next" action would do anything right now
    pub fn can_advance(&self) -> bool {
        !self.loading && self.is_step_valid(self.step)
    }

    pub fn can_retreat(&self) -> bool {
        self.step != Step::ApplicationType
    }

    pub fn update_answers(&mut self, patch: AnswersPatch) {
        self.answers.merge(patch);
    }

    pub fn advance(&mut self) -> Transition {
        if !self.can_advance() {
            return Transition::Blocked;
        }

        if self.step == Step::Refinements {
            let plan = match query::compose(&self.answers) {
                Ok(plan) => plan,
                Err(e) => {
                    warn!(error = %e, "Cannot compose query from answers");
                    return Transition::Blocked;
                }
            };
            self.generation += 1;
            self.loading = true;
            self.results.clear();
            self.failed_roles.clear();
            debug!(generation = self.generation, "Fetch started");
            return Transition::Fetch(FetchTicket {
                generation: self.generation,
                plan,
            });
        }

        self.step = self.step.next();
        debug!(step = self.step.index(), "Advanced");
        Transition::Moved(self.step)
    }

    /// Go back one step. Abandons an in-flight fetch.
    pub fn retreat(&mut self) -> Step {
        self.abandon_fetch();
        self.step = self.step.previous();
        debug!(step = self.step.index(), "Retreated");
        self.step
    }

    /// Back to step 1 with empty answers and results
    pub fn reset(&mut self) {
        self.abandon_fetch();
        self.step = Step::ApplicationType;
        self.answers = WizardAnswers::default();
        self.results.clear();
        self.failed_roles.clear();
        debug!(generation = self.generation, "Wizard reset");
    }

    /// Apply a fetch outcome. Returns false if the outcome is stale.
    pub fn complete_fetch(&mut self, generation: u64, outcome: FetchOutcome) -> bool {
        if !self.loading || generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Discarding stale fetch outcome"
            );
            return false;
        }

        self.results = outcome.results;
        self.failed_roles = outcome.failed_roles;
        self.loading = false;
        self.step = Step::Results;
        true
    }

    fn abandon_fetch(&mut self) {
        if self.loading {
            debug!(generation = self.generation, "In-flight fetch abandoned");
        }
        self.loading = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbering() {
        assert_eq!(Step::ApplicationType.index(), 1);
        assert_eq!(Step::Results.index(), 5);
        assert_eq!(Step::from_index(3), Some(Step::Orientation));
        assert_eq!(Step::from_index(0), None);
        assert_eq!(Step::from_index(6), None);
    }

    #[test]
    fn test_next_and_previous_saturate() {
        assert_eq!(Step::Results.next(), Step::Results);
        assert_eq!(Step::ApplicationType.previous(), Step::ApplicationType);
        assert_eq!(Step::Orientation.next(), Step::Refinements);
    }

    #[test]
    fn test_title_keys_follow_index() {
        assert_eq!(Step::PoleCount.title_key(), "guide.steps.2.title");
    }

    #[test]
    fn test_results_step_has_no_forward_check() {
        let state = WizardState::new();
        assert!(!state.is_step_valid(Step::Results));
        assert!(state.is_step_valid(Step::Refinements));
    }
}
