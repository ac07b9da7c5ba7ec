/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Context;
use bitpress::codes::{dictionary, run_length};
use clap::{Parser, ValueEnum};
use log::debug;
use std::io::{Read, Write};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Compress standard input to standard output.
    Compress,
    /// Expand a previously compressed stream back to the original bytes.
    Expand,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scheme {
    /// Minimal fixed-width codes over the distinct byte values of the input.
    Dictionary,
    /// Alternating run lengths over the bits of the input.
    RunLength,
}

/// Compress or expand raw binary data between standard input and standard
/// output.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(value_enum)]
    mode: Mode,
    /// Encoding scheme; must match between compress and expand, as the
    /// stream does not record it.
    #[arg(long, value_enum, default_value = "dictionary")]
    scheme: Scheme,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut input = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("reading standard input")?;

    let output = match (args.mode, args.scheme) {
        (Mode::Compress, Scheme::Dictionary) => dictionary::compress(&input)?,
        (Mode::Expand, Scheme::Dictionary) => {
            dictionary::expand(&input).context("expanding dictionary stream")?
        }
        (Mode::Compress, Scheme::RunLength) => run_length::compress(&input)?,
        (Mode::Expand, Scheme::RunLength) => {
            run_length::expand(&input).context("expanding run-length stream")?
        }
    };
    debug!("{} bytes in, {} bytes out", input.len(), output.len());

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&output)
        .and_then(|()| stdout.flush())
        .context("writing standard output")?;
    Ok(())
}
