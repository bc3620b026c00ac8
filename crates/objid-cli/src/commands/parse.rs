use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use objid::ObjectId;

#[derive(Args)]
pub struct ParseArgs {
    /// Object id as 32 lowercase hex characters
    #[arg(value_name = "hex")]
    hex: String,
}

pub fn run(args: &ParseArgs) -> Result<i32> {
    let id = match args.hex.parse::<ObjectId>() {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error: '{}' is not a valid object id: {e}", args.hex);
            return Ok(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    describe(&mut out, &id)?;
    Ok(0)
}

fn describe(out: &mut impl Write, id: &ObjectId) -> io::Result<()> {
    let words = id.words();
    let bytes: Vec<String> = id.to_bytes().iter().map(|b| format!("{b:02x}")).collect();

    writeln!(out, "hex:   {id}")?;
    writeln!(
        out,
        "words: {:#010x} {:#010x} {:#010x} {:#010x}",
        words[0], words[1], words[2], words[3]
    )?;
    writeln!(out, "bytes: {}", bytes.join(" "))?;
    writeln!(out, "uuid:  {}", id.to_uuid())?;
    writeln!(out, "empty: {}", id.is_empty())
}
