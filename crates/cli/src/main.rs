mod cli;
mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use compound_growth_core::models::settings::Settings;
use compound_growth_core::GrowthCalculator;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load_optional(cli.config.as_deref()).with_context(|| {
        format!(
            "Loading settings from {}",
            cli.config
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;
    if let Some(path) = cli.history_path {
        settings.history_path = path;
    }

    logging::init(&settings);
    tracing::debug!(?settings, "settings resolved");

    let engine = GrowthCalculator::new(settings);
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Calc(args) => commands::calc(&engine, &args, &mut stdout),
        Commands::Request(args) => commands::request(&engine, &args, &mut stdout),
        Commands::Plan(args) => commands::plan(&engine, &args, &mut stdout),
        Commands::History(args) => commands::history(&engine, &args, &mut stdout),
    }
}
