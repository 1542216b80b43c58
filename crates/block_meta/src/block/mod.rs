// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Two-pass block decoder.
//!
//! The header pass bounds block field 1 and reads the number and digests; the
//! data pass resumes at the end of the header and counts envelopes in block
//! field 2.

pub mod data;
pub mod extract;
pub mod header;
pub mod types;

pub use data::scan_data;
pub use extract::{BlockDecoder, extract_block_metadata};
pub use header::{scan_header, scan_header_counted};
pub use types::{BlockDataSummary, BlockHeaderFields, DecodedBlock, HeaderScan};
