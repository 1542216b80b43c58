// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Base-128 varints: 7 data bits per byte, least significant group first,
//! high bit set on every byte except the last.

use crate::error::DecodeError;
use config::VarintWidth;

/// A 64-bit value never needs more than ten groups.
pub const MAX_VARINT_LEN: usize = 10;

/// Read a varint at `offset` using the 64-bit accumulator.
///
/// Returns the value and the number of bytes consumed.
pub fn read_varint(buf: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    read_varint_with(buf, offset, buf.len(), VarintWidth::Bits64)
}

/// Read a varint at `offset` that must terminate before `end`.
///
/// `end` is clamped to `buf.len()`. Running into `end` before a byte with the
/// high bit clear is [`DecodeError::TruncatedVarint`]; no partial value is
/// returned.
pub fn read_varint_with(
    buf: &[u8],
    offset: usize,
    end: usize,
    width: VarintWidth,
) -> Result<(u64, usize), DecodeError> {
    let end = end.min(buf.len());
    let mut value: u64 = 0;

    for index in 0..MAX_VARINT_LEN {
        let pos = offset.saturating_add(index);
        if pos >= end {
            return Err(DecodeError::TruncatedVarint { offset, end });
        }

        let byte = buf[pos];
        let group = u64::from(byte & 0x7f);

        // The tenth group only has room for the top bit of a u64.
        if index == MAX_VARINT_LEN - 1 && group > 1 && width == VarintWidth::Bits64 {
            return Err(DecodeError::VarintOverflow { offset });
        }

        value |= group << (7 * index as u32);

        if byte & 0x80 == 0 {
            return Ok((apply_width(value, width), index + 1));
        }
    }

    Err(DecodeError::VarintOverflow { offset })
}

fn apply_width(value: u64, width: VarintWidth) -> u64 {
    match width {
        VarintWidth::Bits64 => value,
        VarintWidth::Legacy32 => value & u64::from(u32::MAX),
    }
}

/// Append the varint encoding of `value` to `out`.
pub fn encode_varint_into(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            break;
        }
        out.push(byte | 0x80);
    }
}

/// Encode `value` as a varint.
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    encode_varint_into(value, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_byte_counts() {
        let cases: [(u64, usize); 7] = [
            (0, 1),
            (1, 1),
            (127, 1),
            (128, 2),
            (16383, 2),
            (16384, 3),
            (300_000_000, 5),
        ];

        for (value, expected_len) in cases {
            let encoded = encode_varint(value);
            assert_eq!(encoded.len(), expected_len, "encoded length of {}", value);

            let (decoded, consumed) = read_varint(&encoded, 0).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(consumed, expected_len, "consumed bytes for {}", value);
        }
    }

    #[test]
    fn test_known_encoding() {
        assert_eq!(encode_varint(300), vec![0xac, 0x02]);
        assert_eq!(read_varint(&[0xac, 0x02], 0).unwrap(), (300, 2));
    }

    #[test]
    fn test_reads_at_offset_and_ignores_trailing_bytes() {
        let buf = [0xff, 0x96, 0x01, 0x7f];
        assert_eq!(read_varint(&buf, 1).unwrap(), (150, 2));
    }

    #[test]
    fn test_single_continuation_byte_is_truncated() {
        let err = read_varint(&[0x80], 0).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedVarint { offset: 0, end: 1 });
    }

    #[test]
    fn test_offset_at_end_is_truncated() {
        let err = read_varint(&[0x01], 1).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedVarint { offset: 1, .. }));
    }

    #[test]
    fn test_offset_past_end_is_truncated() {
        assert!(matches!(
            read_varint(&[0x01], usize::MAX),
            Err(DecodeError::TruncatedVarint { .. })
        ));
    }

    #[test]
    fn test_bound_stops_before_buffer_end() {
        // The terminating byte exists but sits outside the allowed range.
        let buf = [0x96, 0x01];
        let err = read_varint_with(&buf, 0, 1, VarintWidth::Bits64).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedVarint { offset: 0, end: 1 });
    }

    #[test]
    fn test_u64_max_fits_in_ten_bytes() {
        let encoded = encode_varint(u64::MAX);
        assert_eq!(encoded.len(), MAX_VARINT_LEN);
        assert_eq!(read_varint(&encoded, 0).unwrap(), (u64::MAX, MAX_VARINT_LEN));
    }

    #[test]
    fn test_value_wider_than_64_bits_is_rejected() {
        // Ten bytes whose last group carries bit 64.
        let mut buf = vec![0xff; MAX_VARINT_LEN - 1];
        buf.push(0x02);
        assert_eq!(
            read_varint(&buf, 0).unwrap_err(),
            DecodeError::VarintOverflow { offset: 0 }
        );
    }

    #[test]
    fn test_eleven_byte_varint_is_rejected() {
        let mut buf = vec![0x80; MAX_VARINT_LEN];
        buf.push(0x00);
        assert_eq!(
            read_varint(&buf, 0).unwrap_err(),
            DecodeError::VarintOverflow { offset: 0 }
        );
    }

    #[test]
    fn test_legacy32_keeps_low_bits() {
        let encoded = encode_varint((1u64 << 32) + 5);
        let (value, consumed) =
            read_varint_with(&encoded, 0, encoded.len(), VarintWidth::Legacy32).unwrap();
        assert_eq!(value, 5);
        assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn test_legacy32_leaves_small_values_alone() {
        let encoded = encode_varint(u64::from(u32::MAX));
        let (value, _) =
            read_varint_with(&encoded, 0, encoded.len(), VarintWidth::Legacy32).unwrap();
        assert_eq!(value, u64::from(u32::MAX));
    }

    #[test]
    fn test_legacy32_tolerates_high_tenth_group() {
        let mut buf = vec![0xff; MAX_VARINT_LEN - 1];
        buf.push(0x7f);
        let (value, consumed) =
            read_varint_with(&buf, 0, buf.len(), VarintWidth::Legacy32).unwrap();
        assert_eq!(value, u64::from(u32::MAX));
        assert_eq!(consumed, MAX_VARINT_LEN);
    }
}
