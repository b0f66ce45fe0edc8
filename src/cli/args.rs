use clap::Parser;
use std::path::PathBuf;

/// Sâm Lốc scorekeeper: track players, settle rounds, keep the tally.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory for the saved session and logs (default: $SAMLOC_HOME or ./.samloc)
    #[arg(long)]
    pub home: Option<PathBuf>,
    /// Log debug output to the terminal
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(self) -> crate::Config {
        crate::Config::from_env().with(self.home, self.verbose)
    }
}
