/// Terminal User Interface module for interactive commands
pub mod guide;

use crate::cli::commands::GuideContext;
use crate::Result;

/// Run the interactive connector guide
pub async fn run_guide(ctx: &GuideContext) -> Result<()> {
    guide::run(ctx).await
}
