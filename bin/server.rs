// Fridge Recipes - Web Server
// Serves data.json, the static front page, and fridge/recipe uploads

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use fridge_recipes::api::{router, AppState};
use fridge_recipes::inventory::parse_expiry;
use fridge_recipes::{load_kitchen, logging, Config};

/// Serve today's recipe over HTTP
#[derive(Parser, Debug)]
#[command(name = "fridge-server", version)]
struct Cli {
    /// Bind host (default 0.0.0.0, or FRIDGE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (default 8000, or FRIDGE_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// CSV file of fridge items; uploads are saved here
    #[arg(short, long)]
    fridge: Option<PathBuf>,

    /// JSON file of recipes; uploads are saved here
    #[arg(short, long)]
    recipes: Option<PathBuf>,

    /// Directory of static files for the front page
    #[arg(long)]
    web_dir: Option<PathBuf>,

    /// Pretend today is this date (DD/MM/YYYY)
    #[arg(long, value_parser = parse_expiry)]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = Config::from_env()?
        .with_files(cli.fridge, cli.recipes)
        .with_address(cli.host, cli.port);
    if let Some(dir) = cli.web_dir {
        config.web_dir = dir;
    }

    let kitchen = load_kitchen(&config);
    let addr = config.bind_address();

    let mut state = AppState::new(kitchen, config);
    if let Some(today) = cli.today {
        state = state.with_today(today);
    }
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("   Data: http://{}/data.json", addr);

    axum::serve(listener, app).await.context("Server stopped")?;
    Ok(())
}
