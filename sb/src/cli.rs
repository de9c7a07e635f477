//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// StudyBuddy - terminal study planner
#[derive(Debug, Parser)]
#[command(
    name = "sb",
    version,
    about = "Plan study activities and track progress in the terminal"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)")]
    pub log_level: Option<String>,
}
