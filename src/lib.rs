//! packmybag library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! packing list engine (models, generator, checklist, planner).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            let path = Config::resolve_path(cli.config.as_deref());
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
        Commands::Plan { .. } => cli::commands::plan::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honouring --config
    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load_from(&path)?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
