// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Records that leave the decoder.
//!
//! Digests are wrapped so they always serialize as lowercase hex, and the
//! metadata record carries the camelCase JSON shape consumed downstream.

pub mod hash;
pub mod metadata;

pub use hash::HexDigest;
pub use metadata::BlockMetadata;
