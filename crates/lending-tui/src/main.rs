mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lending_core::config::CoreConfig;
use lending_core::tracing_setup::init_file_tracing;
use lending_core::Dashboard;

use crate::runtime::run_app;
use ui::App;

#[derive(Parser, Debug)]
#[command(name = "lending-tui")]
#[command(about = "Terminal dashboard for the commercial lending email agent")]
struct Args {
    /// Path to a JSON config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_file_tracing().context("Failed to open log file")?;
    let config = CoreConfig::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    tracing::info!(?config, "Starting lending dashboard");

    ui::install_panic_hook();

    let mut app = App::new(Dashboard::new(config));
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
