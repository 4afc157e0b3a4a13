use std::io::Write;

use async_trait::async_trait;

use super::{localizer_for, write_output, CommandHandler, GuideContext};
use crate::render::render_detail;
use crate::routes::{Page, Route};
use crate::{GuideError, Result};

/// Handler for the `show` command
pub struct ShowCommand {
    pub target: String,
}

impl ShowCommand {
    /// Resolve the target to a connector id and, for routes, their locale
    fn resolve(&self) -> Result<(i64, Option<String>)> {
        if let Ok(id) = self.target.trim().parse::<i64>() {
            return Ok((id, None));
        }

        let route: Route = self.target.parse()?;
        match route.page {
            Page::ConnectorDetail(id) => Ok((id, Some(route.locale))),
            _ => Err(GuideError::Route(format!(
                "'{}' is not a connector detail route",
                self.target
            ))),
        }
    }
}

#[async_trait]
impl CommandHandler for ShowCommand {
    async fn execute(&self, ctx: &GuideContext, out: &mut (dyn Write + Send)) -> Result<()> {
        let (id, locale) = self.resolve()?;

        let record = ctx
            .catalog
            .get(id)
            .await?
            .ok_or(GuideError::NotFound(id))?;

        let text = match locale {
            Some(locale) if locale != ctx.localizer.locale() => {
                render_detail(&record, &localizer_for(&ctx.settings, &locale)?)
            }
            _ => render_detail(&record, &ctx.localizer),
        };
        write_output(out, &text)
    }

    fn name(&self) -> &'static str {
        "show"
    }
}
