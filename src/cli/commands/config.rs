use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// View or check the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        if *check {
            if cfg.workbook.trim().is_empty() {
                return Err(AppError::Config("workbook directory is not set".into()));
            }
            if cfg.courses.is_empty() {
                return Err(AppError::Config("course allow-list is empty".into()));
            }
            if cfg.retry_attempts == 0 {
                return Err(AppError::Config("retry_attempts must be at least 1".into()));
            }
            messages::success("Configuration OK");
        }
    }

    Ok(())
}
