//! Sâm Lốc Scorekeeper Binary
//!
//! Opens the saved session and runs the interactive prompt.
//! Options: --home <DIR>, --verbose

use clap::Parser;
use samloc::*;

fn main() -> anyhow::Result<()> {
    let config = cli::Args::parse().config();
    log(&config)?;
    cli::CLI::new(&config).run()
}
