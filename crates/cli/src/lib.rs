//! Command line front-ends for roster data files.
//!
//! Each binary parses its arguments with the matching module's `Cli`, then
//! hands it to `run`, which loads the data file, applies one command and
//! writes the file back after `add`.

pub mod commands;
pub mod options;
pub mod students;
pub mod table;
pub mod workers;

pub use options::{init_logging, GlobalOpts, MissingArg};
pub use table::Tabular;
