pub mod compare;
pub mod hash;
pub mod parse;
pub mod random;
pub mod sort;

use anyhow::{Context, Result};
use clap::Subcommand;
use objid::ObjectId;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the object id of files or stdin
    Hash(hash::HashArgs),
    /// Generate random object ids
    Random(random::RandomArgs),
    /// Validate an object id and show its layout
    Parse(parse::ParseArgs),
    /// Compare two object ids (-1, 0 or 1)
    Compare(compare::CompareArgs),
    /// Sort object ids read from stdin
    Sort(sort::SortArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Hash(args) => hash::run(args),
        Commands::Random(args) => random::run(args),
        Commands::Parse(args) => parse::run(args),
        Commands::Compare(args) => compare::run(args),
        Commands::Sort(args) => sort::run(args),
    }
}

/// Parse a command-line id, naming the offending argument on failure.
pub(crate) fn parse_id(arg: &str) -> Result<ObjectId> {
    arg.parse::<ObjectId>()
        .with_context(|| format!("not a valid object id: '{arg}'"))
}
