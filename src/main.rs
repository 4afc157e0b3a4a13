use clap::Parser;
use tracing::{debug, error};

use connector_guide::{
    cli::commands::{query::QueryCommand, show::ShowCommand, CommandHandler, GuideContext},
    cli::{Cli, Commands},
    config::SettingsLoader,
    logging::{default_log_path, initialize_file_tracing, initialize_tracing},
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_interactive() {
        initialize_file_tracing(cli.log_level, &default_log_path())?;
    } else {
        initialize_tracing(cli.log_level, cli.log_json);
    }

    let settings = SettingsLoader::new()
        .with_config_path(cli.config.clone())
        .with_catalog(cli.catalog.clone())
        .with_locale(cli.locale.clone())
        .load()?;
    debug!("Resolved settings: {:?}", settings);

    let ctx = GuideContext::from_settings(settings)?;

    let handler: Box<dyn CommandHandler> = match cli.command {
        #[cfg(feature = "tui")]
        Commands::Guide => Box::new(connector_guide::cli::commands::guide::GuideCommand),
        Commands::Query {
            application,
            poles,
            orientation,
            locking,
            special,
            keying,
            json,
        } => Box::new(QueryCommand {
            application,
            poles,
            orientation,
            locking,
            special,
            keying,
            json,
        }),
        Commands::Show { target } => Box::new(ShowCommand { target }),
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = handler.execute(&ctx, &mut stdout).await {
        error!(command = handler.name(), "Command failed: {}", e);
        return Err(e);
    }

    Ok(())
}
