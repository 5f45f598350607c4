//! Workers CLI - keep a list of workers and select them by seniority.

use anyhow::Result;
use clap::Parser;
use roster_cli::commands::current_year;
use roster_cli::workers::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    roster_cli::init_logging(cli.opts.verbose);

    let stdout = std::io::stdout();
    run(cli, current_year(), &mut stdout.lock())
}
