// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Low-level wire primitives: varints, tags and a bounded field scanner.
//!
//! Only the pieces needed to walk the fixed block shape are implemented here.
//! This is not a general message decoder.

pub mod scanner;
pub mod varint;

pub use scanner::FieldScanner;
pub use varint::{MAX_VARINT_LEN, encode_varint, encode_varint_into, read_varint, read_varint_with};

/// Wire type stored in the low 3 bits of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

/// Build a tag value from a field number and wire type.
pub const fn tag(field: u64, wire_type: WireType) -> u64 {
    (field << 3) | wire_type as u64
}

/// A decoded tag together with the offset it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub value: u64,
    pub offset: usize,
}

impl Tag {
    pub fn field(&self) -> u64 {
        self.value >> 3
    }

    /// Raw wire type bits, `0..=7`.
    pub fn wire_bits(&self) -> u8 {
        (self.value & 0x07) as u8
    }

    pub fn wire_type(&self) -> Option<WireType> {
        WireType::from_bits(self.wire_bits())
    }
}
