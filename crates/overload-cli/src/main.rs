//! Overload CLI Application
//!
//! Command-line client for weekly workout plans stored on the Overload
//! server.

mod args;
mod cli;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{catalog_markdown, Cli};
use log::info;
use overload_core::{Config, HttpStoreBuilder, PlanCache, WeightUnit};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let renderer = TerminalRenderer::new(!args.no_color);

    if let Some(Commands::Catalog {
        body_part,
        region,
        equipment,
    }) = &args.command
    {
        let output = catalog_markdown(body_part.as_deref(), region.as_deref(), equipment.as_deref())?;
        return renderer.render(&output);
    }

    let mut config =
        Config::load(args.config_file.as_deref()).context("Failed to load configuration")?;
    if let Some(server_url) = args.server_url {
        config.base_url = server_url;
    }
    if let Some(token) = args.csrf_token {
        config.csrf_token = Some(token);
    }
    if let Some(session) = args.session {
        config.session_cookie = Some(session);
    }

    let store = HttpStoreBuilder::from_config(&config)
        .build()
        .context("Failed to initialize plan store")?;
    let cache = Arc::new(PlanCache::new(Arc::new(store)));
    let cli = Cli::new(cache, renderer, WeightUnit::from(&args.unit));

    info!("Overload started against {}", config.base_url);

    match args.command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Today { day }) => cli.show_today(day).await,
        Some(Commands::Catalog { .. }) | None => cli.list_plans().await,
    }
}
