use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the configuration file and the workbook directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.workbook.clone(), cli.test)?;
    Ok(())
}
