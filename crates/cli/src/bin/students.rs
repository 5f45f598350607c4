//! Students CLI - keep a list of students and their grades.

use anyhow::Result;
use clap::Parser;
use roster_cli::students::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    roster_cli::init_logging(cli.opts.verbose);

    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}
