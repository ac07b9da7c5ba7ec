/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The two encoding pipelines.

Each pipeline is a pair of inverse batch transformations, `compress` and
`expand`, over a complete bit or byte sequence; `expand(compress(x)) == x`
bit-for-bit for every finite input. Both are implemented over the
[`BitRead`](crate::traits::BitRead)/[`BitWrite`](crate::traits::BitWrite)
traits, and both ship byte-slice conveniences that wire up the in-memory
stream implementations.

| Pipeline | Unit | Good for |
|----------|------|----------|
| [`run_length`] | bits | long runs of identical bits (sparse bitmaps) |
| [`dictionary`] | bytes | messages drawn from a small byte alphabet |

Neither pipeline is a general-purpose compressor: inputs without the
structure above can grow under either encoding.

*/

pub mod dictionary;
pub use dictionary::code_width;

pub mod run_length;
pub use run_length::RunLength;
