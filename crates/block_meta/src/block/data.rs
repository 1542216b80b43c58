// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Data pass: counts transaction envelopes in block field 2.
//!
//! Envelopes are assumed to be contiguous. Counting stops at the first entry
//! whose tag is not the envelope tag, without reporting an error.

use super::types::BlockDataSummary;
use crate::consts::{BLOCK_DATA_TAG, DATA_ENVELOPE_TAG};
use crate::error::DecodeError;
use crate::wire::FieldScanner;
use config::VarintWidth;

/// Scan the data sub-message at `offset`, if there is one.
///
/// A missing data section (any other byte, or end of input) is a valid
/// header-only block and yields a count of zero.
pub fn scan_data(
    buf: &[u8],
    offset: usize,
    width: VarintWidth,
) -> Result<BlockDataSummary, DecodeError> {
    let mut top = FieldScanner::bounded(buf, offset, buf.len(), width)?;

    if top.peek_byte().map(u64::from) != Some(BLOCK_DATA_TAG) {
        return Ok(BlockDataSummary::default());
    }
    top.skip(1)?;

    let (start, end) = top.read_length_delimited_range()?;
    let mut scanner = FieldScanner::bounded(buf, start, end, width)?;
    let mut transaction_count = 0;

    while scanner.peek_byte().map(u64::from) == Some(DATA_ENVELOPE_TAG) {
        scanner.skip(1)?;
        scanner.read_length_delimited_range()?;
        transaction_count += 1;
    }

    if !scanner.is_at_end() {
        tracing::trace!(
            offset = scanner.position(),
            remaining = scanner.remaining(),
            "Stopped counting envelopes at non-envelope entry"
        );
    }

    Ok(BlockDataSummary { transaction_count })
}
