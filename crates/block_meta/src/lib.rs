// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoder for the metadata of raw ledger blocks.
//!
//! Block bytes are walked by hand: the header sub-message yields the block
//! number and digests, the data sub-message yields the transaction envelope
//! count. [`BlockDecoder::extract`] never fails; a malformed block produces a
//! [`BlockMetadata`] with an error description instead.

pub mod block;
pub mod chain_info;
pub mod consts;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;
pub mod wire;

pub use block::{BlockDecoder, DecodedBlock, extract_block_metadata};
pub use chain_info::{ChainInfoPreview, preview_prefix};
pub use config::VarintWidth;
pub use error::DecodeError;
pub use types::{BlockMetadata, HexDigest};
