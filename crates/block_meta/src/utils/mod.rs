// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod input;

pub use input::{InputError, parse_hex_input, read_input};
