/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of the bit-stream traits for in-memory buffers.

Both codecs are batch transformations over fully materialized input, so the
readers and writers here are backed by byte slices and growable byte
vectors; no incremental I/O adapter is provided.

*/

mod mem_bit_reader;
pub use mem_bit_reader::MemBitReader;

mod mem_bit_writer;
pub use mem_bit_writer::MemBitWriter;
