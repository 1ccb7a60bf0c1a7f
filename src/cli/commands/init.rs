use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());

        if Config::init_at(&path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }

    Ok(())
}
