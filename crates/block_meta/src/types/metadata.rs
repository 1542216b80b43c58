// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::HexDigest;
use crate::block::DecodedBlock;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// Block metadata as handed to callers.
///
/// When decoding fails every header field is `None`, the count is zero and
/// `error` holds the failure description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    pub block_number: Option<u64>,
    pub previous_block_hash: Option<HexDigest>,
    pub data_hash: Option<HexDigest>,
    #[serde(default)]
    pub transaction_count: u64,
    pub buffer_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BlockMetadata {
    pub fn decoded(block: &DecodedBlock, buffer_length: usize) -> Self {
        Self {
            block_number: block.header.number,
            previous_block_hash: block.header.previous_hash.clone(),
            data_hash: block.header.data_hash.clone(),
            transaction_count: block.data.transaction_count,
            buffer_length,
            error: None,
        }
    }

    pub fn unavailable(err: &DecodeError, buffer_length: usize) -> Self {
        Self {
            block_number: None,
            previous_block_hash: None,
            data_hash: None,
            transaction_count: 0,
            buffer_length,
            error: Some(err.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}
