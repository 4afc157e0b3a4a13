/// Interactive connector guide implementation
pub mod app;
pub mod events;
pub mod options;
pub mod screens;
pub mod theme;

use crate::cli::commands::GuideContext;
use crate::Result;

/// Entry point for the guide
pub async fn run(ctx: &GuideContext) -> Result<()> {
    let app = app::App::new(ctx);
    app.run().await
}
