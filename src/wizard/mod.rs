//! Connector selection wizard
//!
//! [`WizardState`] is the synchronous state machine; [`Wizard`] pairs it with
//! a [`ResultFetcher`] so that leaving the refinements step runs the fetch
//! inline. Front ends that must stay responsive during the fetch (the TUI)
//! drive `WizardState` directly and run the returned [`FetchTicket`] on a
//! task of their own.

pub mod answers;
pub mod fetch;
pub mod query;
pub mod results;
pub mod state;

use std::sync::Arc;

pub use answers::{AnswersPatch, ApplicationType, OrientationChoice, PoleCount, WizardAnswers};
pub use fetch::{FetchOutcome, ResultFetcher};
pub use query::{compose, roles_for, PredicateSet, QueryPlan, Role};
pub use results::ResultSet;
pub use state::{FetchTicket, Step, Transition, WizardState};

use crate::catalog::Catalog;

/// Wizard with an injected catalog
pub struct Wizard {
    state: WizardState,
    fetcher: ResultFetcher,
}

impl Wizard {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            state: WizardState::new(),
            fetcher: ResultFetcher::new(catalog),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn update_answers(&mut self, patch: AnswersPatch) {
        self.state.update_answers(patch);
    }

    /// Advance one step, fetching results when leaving the refinements step
    pub async fn advance(&mut self) -> Step {
        if let Transition::Fetch(ticket) = self.state.advance() {
            let outcome = self.fetcher.fetch(&ticket.plan).await;
            self.state.complete_fetch(ticket.generation, outcome);
        }
        self.state.step()
    }

    pub fn retreat(&mut self) -> Step {
        self.state.retreat()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}
