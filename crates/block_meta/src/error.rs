// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Errors raised while decoding raw block bytes.

use thiserror::Error;

/// Fatal decode failures.
///
/// Unknown fields are not represented here: they are skipped by wire type
/// and counted, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Truncated varint starting at offset {offset}: input ended at {end}")]
    TruncatedVarint { offset: usize, end: usize },

    #[error("Varint starting at offset {offset} does not fit in 64 bits")]
    VarintOverflow { offset: usize },

    #[error("Malformed block: expected header tag 0x0a at offset {offset}, found {found}")]
    MalformedHeaderTag { offset: usize, found: String },

    #[error("Index out of range: field at offset {offset} declares {len} bytes but the range ends at {limit}")]
    IndexOutOfRange {
        offset: usize,
        len: u64,
        limit: usize,
    },
}

impl DecodeError {
    pub(crate) fn malformed_header_tag(offset: usize, found: Option<u8>) -> Self {
        DecodeError::MalformedHeaderTag {
            offset,
            found: match found {
                Some(byte) => format!("0x{:02x}", byte),
                None => "end of input".to_string(),
            },
        }
    }
}
