// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Header pass: bounds block field 1 and reads number and digests from it.

use super::types::{BlockHeaderFields, HeaderScan};
use crate::consts::{
    BLOCK_HEADER_TAG, HEADER_DATA_HASH_TAG, HEADER_NUMBER_TAG, HEADER_PREVIOUS_HASH_TAG,
};
use crate::error::DecodeError;
use crate::types::HexDigest;
use crate::wire::FieldScanner;
use config::VarintWidth;

/// Scan the header sub-message that must start at `offset`.
///
/// Returns the header fields and the offset just past the header.
pub fn scan_header(
    buf: &[u8],
    offset: usize,
    width: VarintWidth,
) -> Result<(BlockHeaderFields, usize), DecodeError> {
    let scan = scan_header_counted(buf, offset, width)?;
    Ok((scan.fields, scan.next_offset))
}

/// Same as [`scan_header`], also reporting how many unknown fields were skipped.
pub fn scan_header_counted(
    buf: &[u8],
    offset: usize,
    width: VarintWidth,
) -> Result<HeaderScan, DecodeError> {
    let mut top = FieldScanner::bounded(buf, offset, buf.len(), width)?;

    let leading = top.peek_byte();
    if leading.map(u64::from) != Some(BLOCK_HEADER_TAG) {
        return Err(DecodeError::malformed_header_tag(offset, leading));
    }
    top.skip(1)?;

    let (start, end) = top.read_length_delimited_range()?;
    let mut scanner = FieldScanner::bounded(buf, start, end, width)?;

    let mut fields = BlockHeaderFields::default();
    let mut skipped_fields = 0;

    while !scanner.is_at_end() {
        let tag = scanner.read_tag()?;
        match tag.value {
            HEADER_NUMBER_TAG => {
                fields.number = Some(scanner.read_varint()?);
            }
            HEADER_PREVIOUS_HASH_TAG => {
                let bytes = scanner.read_length_delimited()?;
                fields.previous_hash = Some(HexDigest::from_bytes(bytes));
            }
            HEADER_DATA_HASH_TAG => {
                let bytes = scanner.read_length_delimited()?;
                fields.data_hash = Some(HexDigest::from_bytes(bytes));
            }
            _ => {
                tracing::trace!(
                    field = tag.field(),
                    wire_type = tag.wire_bits(),
                    offset = tag.offset,
                    "Skipping unrecognized header field"
                );
                scanner.skip_field(&tag)?;
                skipped_fields += 1;
            }
        }
    }

    Ok(HeaderScan {
        fields,
        next_offset: end,
        skipped_fields,
    })
}
