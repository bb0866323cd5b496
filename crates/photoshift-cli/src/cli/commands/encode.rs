//! `photoshift encode <basename>...` – show codec output.

use anyhow::Result;
use photoshift_core::codec;
use std::io::{self, Write};

pub fn run_encode(basenames: &[String]) -> Result<()> {
    let stdout = io::stdout();
    encode_to(&mut stdout.lock(), basenames)
}

fn encode_to(out: &mut impl Write, basenames: &[String]) -> Result<()> {
    for name in basenames {
        writeln!(out, "{}", codec::encode(name))?;
    }
    Ok(())
}
