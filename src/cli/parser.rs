use clap::{Parser, Subcommand};

/// Command-line interface definition for chemlog
/// CLI application to log card-swipe attendance into a per-course workbook
#[derive(Parser)]
#[command(
    name = "chemlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A card-swipe attendance logger: sign in as TA, swipe IDs, rows land in the course sheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or a shared setup)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override workbook directory (useful for tests or a shared mount)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and workbook directory
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List the allowed course codes and their sheet names
    Courses,

    /// Sign in and log swipes from stdin (one swipe per line, EOF signs out)
    Run {
        /// TA name (single word, no spaces)
        #[arg(long = "ta", help = "TA name (single word)")]
        ta: String,

        /// Course number (must be on the allow-list)
        #[arg(long = "course", help = "Course number, e.g. 2070")]
        course: String,
    },
}
