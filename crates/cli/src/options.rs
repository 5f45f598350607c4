//! Options shared by every roster binary.

use clap::{Args, ValueEnum};
use roster_core::{MissingFile, Record, ValidationMode};
use roster_storage::StoreConfig;
use tracing::Level;

/// Missing data file behaviour as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MissingArg {
    /// Exit with an error
    Fail,
    /// Start from an empty list
    Empty,
}

impl From<MissingArg> for MissingFile {
    fn from(arg: MissingArg) -> Self {
        match arg {
            MissingArg::Fail => MissingFile::Fail,
            MissingArg::Empty => MissingFile::Empty,
        }
    }
}

/// Global flags.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOpts {
    /// What to do if the data file does not exist
    #[arg(long, value_enum, global = true)]
    pub missing: Option<MissingArg>,

    /// Reject data files with missing record fields
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Store configuration for `R`, with command-line overrides applied.
    pub fn store_config<R: Record>(&self) -> StoreConfig {
        let mut config = StoreConfig::for_record::<R>();
        if let Some(missing) = self.missing {
            config.missing_file = missing.into();
        }
        if self.strict {
            config.validation = ValidationMode::Strict;
        }
        config
    }
}

/// Install the log subscriber. Logs go to stderr so listings on stdout
/// stay clean.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
