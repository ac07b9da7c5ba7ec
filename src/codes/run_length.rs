/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Alternating run-length code.
//!
//! The input bit sequence is rewritten as a stream of fixed-width counts of
//! alternating implied value, starting from `false`: a count `c ≤ MAX` emits
//! `c` copies of the current value and then switches value, while the
//! all-ones escape marker extends the current run by `MAX` bits *without*
//! switching, so runs of any length can be chained. With the default 8-bit
//! counts, `MAX = 2⁷ - 1 = 127` and the escape marker is `0xFF`:
//!
//! ```text
//! repeated 8-bit counts:
//!   0xFF      add 127 bits to the current run, keep the current value
//!   c < 0xFF  emit c bits of the current value, then switch value
//! the first run has value false; an input starting with a one bit
//! therefore opens with a zero count
//! ```
//!
//! The escape marker is emitted lazily, only once a run has actually
//! outgrown `MAX`, so a run of exactly `MAX` bits costs a single count. A
//! zero count emits nothing and just switches value; since the marker is
//! all ones, the zero counts that byte-alignment padding may append to the
//! stream are harmless.

use crate::error::Error;
use crate::impls::{MemBitReader, MemBitWriter};
use crate::traits::{BitRead, BitWrite};

/// Configuration of the run-length code: the width of its count fields.
///
/// The width is configuration passed explicitly to the encoder/decoder pair;
/// the two sides must agree on it, as the stream does not describe itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLength {
    count_bits: usize,
}

impl Default for RunLength {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLength {
    /// Width of a count field in the default configuration.
    pub const DEFAULT_COUNT_BITS: usize = 8;

    /// Create a run-length code with the default 8-bit count fields.
    #[must_use]
    pub const fn new() -> Self {
        RunLength {
            count_bits: Self::DEFAULT_COUNT_BITS,
        }
    }

    /// Create a run-length code with `count_bits`-bit count fields.
    ///
    /// # Panics
    ///
    /// If `count_bits` is not in `2..=32`.
    #[must_use]
    pub const fn with_count_bits(count_bits: usize) -> Self {
        assert!(
            count_bits >= 2 && count_bits <= 32,
            "count fields must be 2 to 32 bits wide"
        );
        RunLength { count_bits }
    }

    /// The longest run a single count field can represent.
    #[must_use]
    pub const fn max_run(&self) -> u64 {
        (1 << (self.count_bits - 1)) - 1
    }

    /// The all-ones escape marker, outside the count range `0..=MAX`.
    #[must_use]
    pub const fn escape(&self) -> u64 {
        (1 << self.count_bits) - 1
    }

    /// Rewrite the bits of `reader` as run-length counts into `writer`.
    pub fn compress<R: BitRead, W: BitWrite>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), Error> {
        let max = self.max_run();
        let mut last = false;
        let mut count: u64 = 0;

        while !reader.is_empty() {
            let bit = reader.read_bit()?;
            if bit != last {
                writer.write_bits(count, self.count_bits)?;
                last = bit;
                count = 1;
            } else if count == max {
                writer.write_bits(self.escape(), self.count_bits)?;
                count = 1;
            } else {
                count += 1;
            }
        }

        if count != 0 {
            writer.write_bits(count, self.count_bits)?;
        }
        Ok(())
    }

    /// Reconstruct the bit sequence encoded in `reader` into `writer`.
    ///
    /// The exact inverse of [`compress`](RunLength::compress). End of stream
    /// is tested before every count read: trailing bits narrower than a
    /// count field are writer padding and are ignored.
    pub fn expand<R: BitRead, W: BitWrite>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), Error> {
        let max = self.max_run();
        let escape = self.escape();
        let mut last = false;

        while reader.remaining_bits() >= self.count_bits as u64 {
            let count = reader.read_bits(self.count_bits)?;
            if count == escape {
                write_run(writer, last, max)?;
            } else {
                write_run(writer, last, count)?;
                last = !last;
            }
        }
        Ok(())
    }
}

fn write_run<W: BitWrite>(writer: &mut W, value: bool, mut len: u64) -> Result<(), Error> {
    while len > 0 {
        let take = len.min(32) as usize;
        let chunk = if value { (1 << take) - 1 } else { 0 };
        writer.write_bits(chunk, take)?;
        len -= take as u64;
    }
    Ok(())
}

/// Compress `input` with the default configuration, returning the encoded
/// bytes.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut reader = MemBitReader::new(input);
    let mut writer = MemBitWriter::with_capacity(input.len());
    RunLength::new().compress(&mut reader, &mut writer)?;
    Ok(writer.into_bytes())
}

/// Expand a stream produced by [`compress`], returning the original bytes.
pub fn expand(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut reader = MemBitReader::new(input);
    let mut writer = MemBitWriter::with_capacity(input.len());
    RunLength::new().expand(&mut reader, &mut writer)?;
    Ok(writer.into_bytes())
}
