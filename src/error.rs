/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The error type shared by the bit-stream layer and the codecs.

/// Errors raised while reading or decoding a bit stream.
///
/// Encoding never fails structurally: writers only append. All variants are
/// fatal for the operation that raised them; no partial output is valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed-width read was requested past the end of the stream.
    #[error("unexpected end of stream: {requested} bits requested, {available} available")]
    UnexpectedEnd {
        /// Width of the field that could not be read.
        requested: u64,
        /// Bits left in the stream when the read was attempted.
        available: u64,
    },

    /// A decoded index does not point inside the dictionary.
    #[error("code {code} out of range for a dictionary of {unique} symbols")]
    CodeOutOfRange { code: u64, unique: usize },

    /// The padding declared in the header cannot be reconciled with the
    /// number of payload bits actually present.
    #[error("declared padding of {declared} bits is inconsistent with {remaining} payload bits")]
    InconsistentPadding { declared: u64, remaining: u64 },
}
