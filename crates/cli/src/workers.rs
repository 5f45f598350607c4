//! `workers` command line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_core::{select_workers, Collection, Worker};

use crate::commands;
use crate::options::GlobalOpts;

#[derive(Debug, Parser)]
#[command(name = "workers", version)]
#[command(about = "Keep a list of workers and their hire years", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub opts: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new worker
    Add {
        /// The data file name
        #[arg(short, long)]
        filename: PathBuf,
        /// The worker's name
        #[arg(short, long)]
        name: String,
        /// The worker's post
        #[arg(short, long)]
        post: Option<String>,
        /// The year of hiring
        #[arg(short, long, allow_negative_numbers = true)]
        year: i64,
    },
    /// Display all workers
    Display {
        /// The data file name
        #[arg(short, long)]
        filename: PathBuf,
    },
    /// Select the workers
    Select {
        /// The data file name
        #[arg(short, long)]
        filename: PathBuf,
        /// The required period
        #[arg(short = 'P', long, allow_negative_numbers = true)]
        period: i64,
    },
}

/// Execute a parsed command line, printing listings to `out`.
///
/// `current_year` is the reference year for `select`.
pub fn run<W: Write>(cli: Cli, current_year: i32, out: &mut W) -> Result<()> {
    let config = cli.opts.store_config::<Worker>();
    match cli.command {
        Commands::Add { filename, name, post, year } => {
            commands::add(&filename, config, Worker::new(name, post, year))?;
        }
        Commands::Display { filename } => {
            let file = commands::open::<Worker>(&filename, config)?;
            commands::display(file.records(), out)?;
        }
        Commands::Select { filename, period } => {
            let file = commands::open::<Worker>(&filename, config)?;
            let selected = select_workers(file.records(), period, current_year);
            commands::display(&Collection::from_vec(selected), out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::EMPTY_STAFF;

    fn exec(args: &[&str], current_year: i32) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("workers").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, current_year, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_select_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.json");
        let file = path.to_str().unwrap();

        exec(&["add", "-f", file, "-n", "Ivanov I.I.", "-p", "Engineer", "-y", "2015"], 2024).unwrap();
        let text = exec(&["select", "-f", file, "-P", "5"], 2024).unwrap();

        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("| ")).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            format!("| {:>4} | {:<30} | {:<20} | {:>8} |", 1, "Ivanov I.I.", "Engineer", 2015)
        );

        let text = exec(&["select", "-f", file, "-P", "10"], 2024).unwrap();
        assert_eq!(text, format!("{}\n", EMPTY_STAFF));
    }

    #[test]
    fn test_missing_file_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.json");

        let text = exec(&["display", "-f", path.to_str().unwrap()], 2024).unwrap();
        assert_eq!(text, format!("{}\n", EMPTY_STAFF));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_can_be_made_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.json");

        let result = exec(&["--missing", "fail", "display", "-f", path.to_str().unwrap()], 2024);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_without_post_saves_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.json");
        let file = path.to_str().unwrap();

        exec(&["add", "-f", file, "-n", "Petrov", "-y", "2020"], 2024).unwrap();
        exec(&["add", "-f", file, "-n", "Сидоров", "-p", "Водитель", "-y", "2001"], 2024).unwrap();

        let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            saved,
            serde_json::json!([
                {"name": "Petrov", "post": null, "year": 2020},
                {"name": "Сидоров", "post": "Водитель", "year": 2001}
            ])
        );

        let text = exec(&["display", "-f", file], 2024).unwrap();
        assert!(text.contains("|    1 | Petrov"));
        assert!(text.contains("|    2 | Сидоров"));
    }

    #[test]
    fn test_extreme_years_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.json");
        std::fs::write(
            &path,
            r#"[{"name": "Old", "post": null, "year": -2147483648},
                {"name": "Far", "post": null, "year": 3000000000}]"#,
        )
        .unwrap();
        let file = path.to_str().unwrap();

        let text = exec(&["select", "-f", file, "-P", "5"], 2024).unwrap();
        assert!(text.contains("|    1 | Old"));
        assert!(!text.contains("Far"));

        let text = exec(&["display", "-f", file], 2024).unwrap();
        assert!(text.contains("3000000000"));

        exec(&["add", "-f", file, "-n", "Min", "-y", "-9223372036854775808"], 2024).unwrap();
        let text = exec(&["select", "-f", file, "-P", "9223372036854775807"], 2024).unwrap();
        assert!(text.contains("|    1 | Min"));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = exec(&["display", "-f", path.to_str().unwrap()], 2024).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to load"));
    }

    #[test]
    fn test_required_flags() {
        let err = Cli::try_parse_from(["workers", "add", "-f", "s.json", "-n", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["workers", "select", "-f", "s.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["workers", "add", "-f", "s.json", "-n", "x", "-y", "soon"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
