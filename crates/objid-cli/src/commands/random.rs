use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use objid::ObjectId;

#[derive(Args)]
pub struct RandomArgs {
    /// Number of ids to generate
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    count: usize,
}

pub fn run(args: &RandomArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.count {
        writeln!(out, "{}", ObjectId::new_random())?;
    }
    tracing::info!(count = args.count, "generated random ids");
    Ok(0)
}
