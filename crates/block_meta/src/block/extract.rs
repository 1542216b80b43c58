// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::data::scan_data;
use super::header::scan_header_counted;
use super::types::DecodedBlock;
use crate::error::DecodeError;
use crate::types::BlockMetadata;
use config::{DecoderConfig, VarintWidth};

/// Decodes raw block bytes into header metadata and an envelope count.
///
/// Holds no per-call state, so one decoder can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockDecoder {
    width: VarintWidth,
}

impl BlockDecoder {
    pub fn new(width: VarintWidth) -> Self {
        Self { width }
    }

    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::new(config.varint_width)
    }

    pub fn width(&self) -> VarintWidth {
        self.width
    }

    /// Run the header pass, then the data pass from the end of the header.
    pub fn decode(&self, buf: &[u8]) -> Result<DecodedBlock, DecodeError> {
        let header = scan_header_counted(buf, 0, self.width)?;
        let data = scan_data(buf, header.next_offset, self.width)?;

        Ok(DecodedBlock {
            header: header.fields,
            data,
            header_end: header.next_offset,
            skipped_fields: header.skipped_fields,
        })
    }

    /// Best-effort decode into the boundary record.
    ///
    /// A decode failure yields a record with every field unavailable and the
    /// error description attached; it is never returned as an error.
    pub fn extract(&self, buf: &[u8]) -> BlockMetadata {
        match self.decode(buf) {
            Ok(decoded) => {
                tracing::debug!(
                    block_number = ?decoded.header.number,
                    transaction_count = decoded.data.transaction_count,
                    skipped_fields = decoded.skipped_fields,
                    buffer_length = buf.len(),
                    "Decoded block metadata"
                );
                BlockMetadata::decoded(&decoded, buf.len())
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    buffer_length = buf.len(),
                    "Block metadata unavailable"
                );
                BlockMetadata::unavailable(&err, buf.len())
            }
        }
    }
}

/// Extract metadata with the default 64-bit decoder.
pub fn extract_block_metadata(buf: &[u8]) -> BlockMetadata {
    BlockDecoder::default().extract(buf)
}
