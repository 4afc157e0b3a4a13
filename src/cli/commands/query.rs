use std::io::Write;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::{write_output, CommandHandler, GuideContext};
use crate::render::{render_results, ResultsView};
use crate::wizard::{
    AnswersPatch, ApplicationType, OrientationChoice, PoleCount, ResultSet, Role, Step, Wizard,
    WizardAnswers,
};
use crate::{GuideError, Result};

/// Handler for the `query` command
pub struct QueryCommand {
    pub application: ApplicationType,
    pub poles: u8,
    pub orientation: OrientationChoice,
    pub locking: bool,
    pub special: bool,
    pub keying: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct QueryReport<'a> {
    answers: &'a WizardAnswers,
    results: &'a ResultSet,
    failed_roles: &'a [Role],
}

impl QueryCommand {
    /// Answers for each step, in step order
    fn patches(&self) -> Result<Vec<(Step, AnswersPatch)>> {
        Ok(vec![
            (
                Step::ApplicationType,
                AnswersPatch::application_type(self.application),
            ),
            (
                Step::PoleCount,
                AnswersPatch::pole_count(PoleCount::try_from(self.poles)?),
            ),
            (Step::Orientation, AnswersPatch::orientation(self.orientation)),
            (
                Step::Refinements,
                AnswersPatch {
                    requires_locking: Some(self.locking),
                    special_version: Some(self.special),
                    specific_keying: Some(self.keying),
                    ..Default::default()
                },
            ),
        ])
    }
}

#[async_trait]
impl CommandHandler for QueryCommand {
    async fn execute(&self, ctx: &GuideContext, out: &mut (dyn Write + Send)) -> Result<()> {
        let mut wizard = Wizard::new(ctx.catalog.clone());

        for (step, patch) in self.patches()? {
            wizard.update_answers(patch);
            let reached = wizard.advance().await;
            debug!(from = step.index(), to = reached.index(), "Query step");
            if reached == step {
                return Err(GuideError::IncompleteAnswers(step));
            }
        }

        let state = wizard.state();
        let text = if self.json {
            let report = QueryReport {
                answers: state.answers(),
                results: state.results(),
                failed_roles: state.failed_roles(),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        } else {
            let view = ResultsView::project(state.results(), state.is_loading());
            render_results(&view, &ctx.localizer)
        };

        write_output(out, &text)
    }

    fn name(&self) -> &'static str {
        "query"
    }
}
