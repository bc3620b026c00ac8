use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use objid::ObjectId;
use rayon::prelude::*;

#[derive(Args)]
pub struct HashArgs {
    /// Read content from stdin (the default when no files are given)
    #[arg(long)]
    stdin: bool,

    /// Print only the id, without the input name
    #[arg(long)]
    bare: bool,

    /// Files to hash
    #[arg(value_name = "file")]
    files: Vec<PathBuf>,
}

pub fn run(args: &HashArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.stdin || args.files.is_empty() {
        let id = ObjectId::from_reader(io::stdin().lock()).context("failed to read stdin")?;
        write_entry(&mut out, id, "-", args.bare)?;
    }

    // One builder per file; results come back in argument order.
    let results: Vec<Result<ObjectId>> = args.files.par_iter().map(|p| hash_file(p)).collect();
    for (path, result) in args.files.iter().zip(results) {
        write_entry(&mut out, result?, &path.display().to_string(), args.bare)?;
    }

    Ok(0)
}

fn hash_file(path: &Path) -> Result<ObjectId> {
    let file =
        File::open(path).with_context(|| format!("cannot open '{}'", path.display()))?;
    let id = ObjectId::from_reader(file)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), %id, "hashed file");
    Ok(id)
}

fn write_entry(out: &mut impl Write, id: ObjectId, name: &str, bare: bool) -> io::Result<()> {
    if bare {
        writeln!(out, "{id}")
    } else {
        writeln!(out, "{id}  {name}")
    }
}
