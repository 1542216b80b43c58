// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cheap fingerprint of a chain info blob, without any field decoding.

use serde::{Deserialize, Serialize};

/// Hex-encode the first `min(n, buf.len())` bytes of `buf`.
pub fn preview_prefix(buf: &[u8], n: usize) -> String {
    hex::encode(&buf[..n.min(buf.len())])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfoPreview {
    pub prefix_hex: String,
    /// Number of bytes actually encoded in `prefix_hex`.
    pub preview_bytes: usize,
    pub buffer_length: usize,
}

impl ChainInfoPreview {
    pub fn new(buf: &[u8], n: usize) -> Self {
        let prefix_hex = preview_prefix(buf, n);
        Self {
            preview_bytes: prefix_hex.len() / 2,
            prefix_hex,
            buffer_length: buf.len(),
        }
    }
}
