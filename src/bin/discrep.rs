//! Diagnostic comparator for solver timing tables.
//!
//! Reads two semicolon-delimited result files and prints every index
//! whose timing values disagree by more than the noise tolerance.
//! Indices present in only one file are skipped.

use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use polyprep::compare::{ResultTable, diverging_indices};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        println!("usage: {} result1 result2", args[0]);
        return Ok(());
    }

    let one = ResultTable::load(Path::new(&args[1]))
        .with_context(|| format!("Failed to read result table: {}", args[1]))?;
    let two = ResultTable::load(Path::new(&args[2]))
        .with_context(|| format!("Failed to read result table: {}", args[2]))?;

    for index in diverging_indices(&one, &two) {
        println!("{}", index);
    }

    Ok(())
}
