// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field tags of the block shape understood by the decoder.
//!
//! Every tag is `(field_number << 3) | wire_type` and fits in a single byte.

use crate::wire::{WireType, tag};

/// Block field 1: the nested header message.
pub const BLOCK_HEADER_TAG: u64 = tag(1, WireType::LengthDelimited);

/// Block field 2: the nested data message.
pub const BLOCK_DATA_TAG: u64 = tag(2, WireType::LengthDelimited);

/// Header field 1: block number.
pub const HEADER_NUMBER_TAG: u64 = tag(1, WireType::Varint);

/// Header field 2: previous block digest.
pub const HEADER_PREVIOUS_HASH_TAG: u64 = tag(2, WireType::LengthDelimited);

/// Header field 3: data digest.
pub const HEADER_DATA_HASH_TAG: u64 = tag(3, WireType::LengthDelimited);

/// Data field 1: a transaction envelope, repeated.
pub const DATA_ENVELOPE_TAG: u64 = tag(1, WireType::LengthDelimited);
