// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading raw block or chain info bytes for the command-line front end.

use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Parse hex text into bytes.
///
/// An optional `0x` prefix is stripped and ASCII whitespace anywhere in the
/// text is ignored, so wrapped dumps can be pasted as is.
pub fn parse_hex_input(text: &str) -> Result<Vec<u8>, InputError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(hex::decode(compact)?)
}

/// Read raw bytes from `path`, or from stdin when `path` is `-`.
///
/// With `hex` set the content is treated as hex text.
pub fn read_input(path: &Path, hex: bool) -> Result<Vec<u8>, InputError> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(path = %path.display(), bytes = raw.len(), hex, "Read input");

    if hex {
        parse_hex_input(&String::from_utf8_lossy(&raw))
    } else {
        Ok(raw)
    }
}
