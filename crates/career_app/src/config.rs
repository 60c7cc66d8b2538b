use std::path::PathBuf;

use career_logging::LogDestination;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Browse careers, keep favorites and compare jobs from the terminal.
#[derive(Debug, Parser)]
#[command(name = "career_guide", version)]
pub(crate) struct Args {
    /// Directory holding personalization state, one JSON file per key.
    #[arg(long, default_value = "career_guide_data")]
    pub data_dir: PathBuf,

    /// RON catalog to load instead of the bundled one.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log debug messages too.
    #[arg(long)]
    pub verbose: bool,
}
