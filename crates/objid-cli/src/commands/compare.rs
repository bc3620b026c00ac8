use anyhow::Result;
use clap::Args;

use super::parse_id;

#[derive(Args)]
pub struct CompareArgs {
    /// First object id
    #[arg(value_name = "a")]
    a: String,

    /// Second object id
    #[arg(value_name = "b")]
    b: String,
}

pub fn run(args: &CompareArgs) -> Result<i32> {
    let a = parse_id(&args.a)?;
    let b = parse_id(&args.b)?;
    println!("{}", a.compare_to(&b));
    Ok(0)
}
