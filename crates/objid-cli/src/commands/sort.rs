use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use objid::collections::IdArray;

use super::parse_id;

#[derive(Args)]
pub struct SortArgs {
    /// Drop duplicate ids
    #[arg(short, long)]
    unique: bool,
}

pub fn run(args: &SortArgs) -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    sort_ids(stdin.lock(), &mut stdout.lock(), args.unique)?;
    Ok(0)
}

/// Read one id per line, write them back in id order. Blank lines are skipped.
fn sort_ids(input: impl BufRead, out: &mut impl Write, unique: bool) -> Result<()> {
    let mut ids = IdArray::new();
    for (n, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let id = parse_id(line).with_context(|| format!("line {}", n + 1))?;
        ids.push(id);
    }

    let total = ids.len();
    if unique {
        ids.dedup();
    }
    tracing::debug!(read = total, written = ids.len(), "sorted ids");

    for id in ids.iter_sorted() {
        writeln!(out, "{id}")?;
    }
    Ok(())
}
