use ansi_term::Colour;

use crate::config::Config;
use crate::errors::AppResult;

/// List the allowed course codes and the sheet each one writes to.
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("📋 Allowed courses:\n");

    for (code, sheet) in cfg.courses.entries() {
        println!("  {} -> {}", Colour::Green.paint(code), sheet);
    }

    Ok(())
}
