/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dictionary code.
//!
//! The input bytes are rewritten as minimal fixed-width indices into the
//! ordered set of distinct byte values that actually occur, prefixed by a
//! header describing that set and the final padding:
//!
//! ```text
//! [3 bits: padding]  [8 bits: unique - 1]
//! [unique bytes: dictionary entries, first-occurrence order]
//! [one code-width-bit index per input byte, original order]
//! [padding zero bits, up to byte alignment]
//! ```
//!
//! The code width is `max(1, ⌈log₂ unique⌉)` — see [`code_width`] — so a
//! message over few distinct byte values packs into few bits per symbol.
//!
//! An empty input encodes to an empty stream. The symbol-count field
//! therefore only ever describes 1 to 256 symbols, and storing `unique - 1`
//! makes the full-alphabet case fit its 8 bits.
//!
//! The `padding` field is the exact number of zero bits appended to
//! byte-align the stream. Padding sits right after the last real code, so a
//! decoder reading codes greedily picks up exactly `padding / code width`
//! (integer division) spurious trailing codes; the field lets it drop them.

use crate::error::Error;
use crate::impls::{MemBitReader, MemBitWriter};
use crate::traits::{BitRead, BitWrite};
use log::debug;

/// Width of the padding header field.
const PADDING_BITS: usize = 3;
/// Width of the symbol-count header field.
const UNIQUE_BITS: usize = 8;

/// Return the width in bits of the codes for a dictionary of `unique`
/// symbols: `max(1, ⌈log₂ unique⌉)`.
///
/// The width is clamped to at least one bit so that a single-symbol message
/// still produces one (zero) code per input byte rather than an unreadable
/// zero-width field.
#[must_use]
#[inline]
pub fn code_width(unique: usize) -> usize {
    debug_assert!((1..=256).contains(&unique));
    if unique <= 1 {
        1
    } else {
        (unique - 1).ilog2() as usize + 1
    }
}

/// Zero bits the writer will append to byte-align the encoded stream.
///
/// The dictionary bytes and the symbol-count field are whole bytes and
/// cannot change the total modulo 8, so only the padding field and the
/// codes matter.
fn padding_bits(width: usize, len: usize) -> u64 {
    let used = (PADDING_BITS as u64 + UNIQUE_BITS as u64 + width as u64 * len as u64) % 8;
    (8 - used) % 8
}

/// The distinct byte values of a message, in first-occurrence order, with a
/// direct value-to-code table over the full byte domain.
#[derive(Debug)]
struct Dictionary {
    entries: Vec<u8>,
    /// `codes[b]` is the code of byte `b`, meaningful iff `present[b]`.
    codes: [u8; 256],
    present: [bool; 256],
}

impl Dictionary {
    fn build(input: &[u8]) -> Self {
        let mut dict = Dictionary {
            entries: Vec::new(),
            codes: [0; 256],
            present: [false; 256],
        };
        for &byte in input {
            if !dict.present[byte as usize] {
                dict.present[byte as usize] = true;
                dict.codes[byte as usize] = dict.entries.len() as u8;
                dict.entries.push(byte);
            }
        }
        dict
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    fn code_of(&self, byte: u8) -> u64 {
        self.codes[byte as usize] as u64
    }
}

/// Encode `input` into `writer`. An empty input writes nothing.
pub fn encode<W: BitWrite>(input: &[u8], writer: &mut W) -> Result<(), Error> {
    if input.is_empty() {
        return Ok(());
    }

    let dict = Dictionary::build(input);
    let unique = dict.len();
    let width = code_width(unique);
    let padding = padding_bits(width, input.len());
    debug!("dictionary of {unique} symbols, {width}-bit codes, {padding} padding bits");

    writer.write_bits(padding, PADDING_BITS)?;
    writer.write_bits((unique - 1) as u64, UNIQUE_BITS)?;
    for &byte in &dict.entries {
        writer.write_bits(byte as u64, 8)?;
    }
    for &byte in input {
        writer.write_bits(dict.code_of(byte), width)?;
    }
    Ok(())
}

/// Decode the stream in `reader`, returning the original bytes.
///
/// The exact inverse of [`encode`] followed by closing the writer. Fails
/// with [`Error::UnexpectedEnd`] if the header or the dictionary is
/// truncated, with [`Error::InconsistentPadding`] if the declared padding
/// cannot be reconciled with the payload length, and with
/// [`Error::CodeOutOfRange`] if a code does not point inside the
/// dictionary.
pub fn decode<R: BitRead>(reader: &mut R) -> Result<Vec<u8>, Error> {
    if reader.is_empty() {
        return Ok(Vec::new());
    }

    let padding = reader.read_bits(PADDING_BITS)?;
    let unique = reader.read_bits(UNIQUE_BITS)? as usize + 1;
    let mut entries = Vec::with_capacity(unique);
    for _ in 0..unique {
        entries.push(reader.read_bits(8)? as u8);
    }

    let width = code_width(unique) as u64;
    let remaining = reader.remaining_bits();
    // The payload is length × width code bits followed by the declared
    // padding, so a greedy reader sees padding / width spurious codes.
    let total = remaining / width;
    let spurious = padding / width;
    if spurious > total || remaining % width != padding % width {
        return Err(Error::InconsistentPadding {
            declared: padding,
            remaining,
        });
    }
    let length = (total - spurious) as usize;
    debug!("dictionary of {unique} symbols, {width}-bit codes, {length} message bytes");

    let mut output = Vec::with_capacity(length);
    for _ in 0..length {
        let code = reader.read_bits(width as usize)?;
        match entries.get(code as usize) {
            Some(&byte) => output.push(byte),
            None => return Err(Error::CodeOutOfRange { code, unique }),
        }
    }
    Ok(output)
}

/// Compress `input`, returning the encoded bytes.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut writer = MemBitWriter::with_capacity(input.len());
    encode(input, &mut writer)?;
    Ok(writer.into_bytes())
}

/// Expand a stream produced by [`compress`], returning the original bytes.
pub fn expand(input: &[u8]) -> Result<Vec<u8>, Error> {
    decode(&mut MemBitReader::new(input))
}
