use std::io::Write;

use async_trait::async_trait;

use super::{CommandHandler, GuideContext};
use crate::cli::tui;
use crate::Result;

/// Handler for the interactive `guide` command
pub struct GuideCommand;

#[async_trait]
impl CommandHandler for GuideCommand {
    async fn execute(&self, ctx: &GuideContext, _out: &mut (dyn Write + Send)) -> Result<()> {
        tui::run_guide(ctx).await
    }

    fn name(&self) -> &'static str {
        "guide"
    }
}
