// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Upper bound for `preview_bytes`, chain info blobs are small.
pub const MAX_PREVIEW_BYTES: usize = 4096;

/// Accumulator width used when decoding varints.
///
/// `Bits64` rejects values that do not fit in a `u64`. `Legacy32` decodes with
/// the 64-bit accumulator and then keeps only the low 32 bits of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarintWidth {
    #[default]
    Bits64,
    Legacy32,
}

impl VarintWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            VarintWidth::Bits64 => "64",
            VarintWidth::Legacy32 => "legacy32",
        }
    }
}

impl fmt::Display for VarintWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarintWidth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], "").as_str() {
            "64" | "bits64" | "u64" => Ok(VarintWidth::Bits64),
            "legacy32" | "32" | "u32" => Ok(VarintWidth::Legacy32),
            _ => Err(ConfigError::DecoderError(format!(
                "Invalid varint width '{}'. Must be one of: 64, legacy32",
                s
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for VarintWidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Varint accumulator width
    ///
    /// Env: BLOCKMETA_DECODER_VARINT_WIDTH
    /// Valid values: 64, legacy32
    /// Default: 64
    pub varint_width: VarintWidth,

    /// Number of leading bytes hex-encoded by the chain info preview
    ///
    /// Env: BLOCKMETA_DECODER_PREVIEW_BYTES
    /// Default: 32
    pub preview_bytes: usize,
}

pub(crate) fn default_preview_bytes() -> usize {
    32
}

/// Check a preview length against `1..=MAX_PREVIEW_BYTES`.
pub fn check_preview_bytes(preview_bytes: usize) -> Result<usize, ConfigError> {
    if preview_bytes == 0 || preview_bytes > MAX_PREVIEW_BYTES {
        return Err(ConfigError::DecoderError(format!(
            "Preview bytes must be between 1 and {}, got {}",
            MAX_PREVIEW_BYTES, preview_bytes
        )));
    }

    Ok(preview_bytes)
}

impl DecoderConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_preview_bytes(self.preview_bytes)?;
        Ok(())
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            varint_width: VarintWidth::default(),
            preview_bytes: default_preview_bytes(),
        }
    }
}
