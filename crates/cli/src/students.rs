//! `students` command line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_core::Student;

use crate::commands;
use crate::options::GlobalOpts;

#[derive(Debug, Parser)]
#[command(name = "students", version)]
#[command(about = "Keep a list of students and their grades", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub opts: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new student
    Add {
        /// The data file name
        #[arg(short, long)]
        filename: PathBuf,
        /// The student's full name
        #[arg(short, long)]
        name: String,
        /// The student's group number
        #[arg(short, long)]
        group: String,
        /// The student's grades, separated by spaces
        #[arg(short = 'r', long, allow_hyphen_values = true)]
        grades: String,
    },
    /// Display all students
    Display {
        /// The data file name
        #[arg(short, long)]
        filename: PathBuf,
    },
}

/// Execute a parsed command line, printing listings to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Add { filename, name, group, grades } => {
            let student = Student::new(name, group, &grades)?;
            commands::add(&filename, cli.opts.store_config::<Student>(), student)?;
        }
        Commands::Display { filename } => {
            let file = commands::open::<Student>(&filename, cli.opts.store_config::<Student>())?;
            commands::display(file.records(), out)?;
        }
    }
    Ok(())
}
