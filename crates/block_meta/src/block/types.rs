// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::HexDigest;

/// Fields pulled from the header sub-message. Any of them may be absent if
/// its tag never appears; a repeated tag overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockHeaderFields {
    pub number: Option<u64>,
    pub previous_hash: Option<HexDigest>,
    pub data_hash: Option<HexDigest>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockDataSummary {
    pub transaction_count: u64,
}

/// Output of the header pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderScan {
    pub fields: BlockHeaderFields,
    /// Offset just past the header sub-message, where the data pass starts.
    pub next_offset: usize,
    /// Unknown header fields skipped by wire type.
    pub skipped_fields: usize,
}

/// Successful decode of a raw block, with diagnostics the boundary record
/// does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    pub header: BlockHeaderFields,
    pub data: BlockDataSummary,
    pub header_end: usize,
    pub skipped_fields: usize,
}
