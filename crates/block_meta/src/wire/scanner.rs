// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cursor over a bounded `[start, end)` range of a block buffer.
//!
//! All offsets reported by the scanner, and by the errors it returns, are
//! absolute positions in the original buffer. The cursor only moves forward
//! and never passes `end`.

use super::{Tag, WireType, varint::read_varint_with};
use crate::error::DecodeError;
use config::VarintWidth;

#[derive(Debug, Clone)]
pub struct FieldScanner<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
    width: VarintWidth,
}

impl<'a> FieldScanner<'a> {
    /// Scanner over the whole buffer.
    pub fn new(buf: &'a [u8], width: VarintWidth) -> Self {
        Self {
            buf,
            pos: 0,
            end: buf.len(),
            width,
        }
    }

    /// Scanner over `[start, end)`.
    ///
    /// Fails with [`DecodeError::IndexOutOfRange`] if the range does not lie
    /// within the buffer.
    pub fn bounded(
        buf: &'a [u8],
        start: usize,
        end: usize,
        width: VarintWidth,
    ) -> Result<Self, DecodeError> {
        if end > buf.len() || start > end {
            return Err(DecodeError::IndexOutOfRange {
                offset: start,
                len: end.saturating_sub(start) as u64,
                limit: buf.len(),
            });
        }

        Ok(Self {
            buf,
            pos: start,
            end,
            width,
        })
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Next byte inside the range, without consuming it.
    pub fn peek_byte(&self) -> Option<u8> {
        if self.is_at_end() {
            None
        } else {
            Some(self.buf[self.pos])
        }
    }

    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let (value, consumed) = read_varint_with(self.buf, self.pos, self.end, self.width)?;
        self.pos += consumed;
        Ok(value)
    }

    /// Tags are varints as well, but are always read with the full 64-bit
    /// accumulator so a legacy width cannot alias an unknown field onto a
    /// known one.
    pub fn read_tag(&mut self) -> Result<Tag, DecodeError> {
        let offset = self.pos;
        let (value, consumed) =
            read_varint_with(self.buf, self.pos, self.end, VarintWidth::Bits64)?;
        self.pos += consumed;
        Ok(Tag { value, offset })
    }

    /// Advance by `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<(), DecodeError> {
        let next = self.checked_advance(self.pos, len as u64)?;
        self.pos = next;
        Ok(())
    }

    /// Read a length prefix and return the `[start, end)` range it covers,
    /// leaving the cursor just after that range.
    pub fn read_length_delimited_range(&mut self) -> Result<(usize, usize), DecodeError> {
        let prefix_offset = self.pos;
        let len = self.read_varint()?;
        let start = self.pos;
        let end = self
            .checked_advance(start, len)
            .map_err(|err| match err {
                DecodeError::IndexOutOfRange { len, limit, .. } => DecodeError::IndexOutOfRange {
                    offset: prefix_offset,
                    len,
                    limit,
                },
                other => other,
            })?;
        self.pos = end;
        Ok((start, end))
    }

    /// Read a length prefix and return the payload bytes.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8], DecodeError> {
        let (start, end) = self.read_length_delimited_range()?;
        Ok(&self.buf[start..end])
    }

    /// Skip the value of a field whose tag was just read.
    ///
    /// Group start and end tags carry no payload of their own; fields inside
    /// a group are skipped one by one by their own wire types. Wire types 6
    /// and 7 do not exist, so only the tag is consumed and scanning resumes
    /// at the next byte.
    pub fn skip_field(&mut self, tag: &Tag) -> Result<(), DecodeError> {
        match tag.wire_type() {
            Some(WireType::Varint) => self.read_varint().map(|_| ()),
            Some(WireType::Fixed64) => self.skip(8),
            Some(WireType::LengthDelimited) => self.read_length_delimited_range().map(|_| ()),
            Some(WireType::Fixed32) => self.skip(4),
            Some(WireType::StartGroup) | Some(WireType::EndGroup) => Ok(()),
            None => {
                tracing::trace!(
                    field = tag.field(),
                    wire_type = tag.wire_bits(),
                    offset = tag.offset,
                    "Invalid wire type, skipping tag only"
                );
                Ok(())
            }
        }
    }

    fn checked_advance(&self, from: usize, len: u64) -> Result<usize, DecodeError> {
        usize::try_from(len)
            .ok()
            .and_then(|len| from.checked_add(len))
            .filter(|next| *next <= self.end)
            .ok_or(DecodeError::IndexOutOfRange {
                offset: from,
                len,
                limit: self.end,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_rejects_range_past_buffer() {
        let buf = [0u8; 4];
        let err = FieldScanner::bounded(&buf, 1, 5, VarintWidth::Bits64).unwrap_err();
        assert_eq!(
            err,
            DecodeError::IndexOutOfRange {
                offset: 1,
                len: 4,
                limit: 4
            }
        );
    }

    #[test]
    fn test_bounded_accepts_empty_range_at_end() {
        let buf = [0u8; 4];
        let scanner = FieldScanner::bounded(&buf, 4, 4, VarintWidth::Bits64).unwrap();
        assert!(scanner.is_at_end());
        assert_eq!(scanner.peek_byte(), None);
    }

    #[test]
    fn test_peek_respects_range_end() {
        let buf = [0x01, 0x02, 0x03];
        let scanner = FieldScanner::bounded(&buf, 0, 0, VarintWidth::Bits64).unwrap();
        assert_eq!(scanner.peek_byte(), None);
    }

    #[test]
    fn test_read_length_delimited() {
        let buf = [0x03, b'a', b'b', b'c', 0x7f];
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        assert_eq!(scanner.read_length_delimited().unwrap(), b"abc");
        assert_eq!(scanner.position(), 4);
        assert_eq!(scanner.remaining(), 1);
    }

    #[test]
    fn test_length_past_range_end_is_out_of_range() {
        let buf = [0x05, 0x01, 0x02];
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        let err = scanner.read_length_delimited().unwrap_err();
        assert_eq!(
            err,
            DecodeError::IndexOutOfRange {
                offset: 0,
                len: 5,
                limit: 3
            }
        );
        // Cursor is not moved past the failing prefix's payload.
        assert!(scanner.position() <= buf.len());
    }

    #[test]
    fn test_huge_length_does_not_overflow() {
        let mut buf = crate::wire::encode_varint(u64::MAX);
        buf.push(0x00);
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        assert!(matches!(
            scanner.read_length_delimited(),
            Err(DecodeError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_skip_varint_field() {
        // field 9 varint, value 300 (two bytes), then a marker byte
        let buf = [0x48, 0xac, 0x02, 0xee];
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        let tag = scanner.read_tag().unwrap();
        assert_eq!(tag.field(), 9);
        scanner.skip_field(&tag).unwrap();
        assert_eq!(scanner.peek_byte(), Some(0xee));
    }

    #[test]
    fn test_skip_length_delimited_field() {
        // field 4 bytes, payload contains bytes that look like tags
        let buf = [0x22, 0x03, 0x08, 0x12, 0x1a, 0xee];
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        let tag = scanner.read_tag().unwrap();
        scanner.skip_field(&tag).unwrap();
        assert_eq!(scanner.peek_byte(), Some(0xee));
    }

    #[test]
    fn test_skip_fixed_width_fields() {
        let mut buf = vec![0x29];
        buf.extend_from_slice(&[0u8; 8]);
        buf.push(0x2d);
        buf.extend_from_slice(&[0u8; 4]);
        buf.push(0xee);

        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        let fixed64 = scanner.read_tag().unwrap();
        assert_eq!(fixed64.wire_type(), Some(WireType::Fixed64));
        scanner.skip_field(&fixed64).unwrap();
        let fixed32 = scanner.read_tag().unwrap();
        assert_eq!(fixed32.wire_type(), Some(WireType::Fixed32));
        scanner.skip_field(&fixed32).unwrap();
        assert_eq!(scanner.peek_byte(), Some(0xee));
    }

    #[test]
    fn test_skip_truncated_fixed64_is_out_of_range() {
        let buf = [0x29, 0x00, 0x00];
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        let tag = scanner.read_tag().unwrap();
        assert!(matches!(
            scanner.skip_field(&tag),
            Err(DecodeError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_skip_group_markers_consume_tag_only() {
        // start group field 4, varint field 5 inside it, end group field 4
        let buf = [0x23, 0x28, 0x07, 0x24, 0xee];
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);

        let start = scanner.read_tag().unwrap();
        assert_eq!(start.wire_type(), Some(WireType::StartGroup));
        scanner.skip_field(&start).unwrap();
        assert_eq!(scanner.position(), 1);

        let inner = scanner.read_tag().unwrap();
        scanner.skip_field(&inner).unwrap();

        let end = scanner.read_tag().unwrap();
        assert_eq!(end.wire_type(), Some(WireType::EndGroup));
        scanner.skip_field(&end).unwrap();
        assert_eq!(scanner.peek_byte(), Some(0xee));
    }

    #[test]
    fn test_skip_invalid_wire_types_consume_tag_only() {
        for tag_byte in [0x0e, 0x0f, 0x2e, 0x2f] {
            let buf = [tag_byte, 0xee];
            let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
            let tag = scanner.read_tag().unwrap();
            assert_eq!(tag.wire_type(), None);
            scanner.skip_field(&tag).unwrap();
            assert_eq!(scanner.peek_byte(), Some(0xee), "tag 0x{:02x}", tag_byte);
        }
    }

    #[test]
    fn test_multi_byte_tag() {
        // field 16 varint: tag 0x80 0x01, value 1
        let buf = [0x80, 0x01, 0x01];
        let mut scanner = FieldScanner::new(&buf, VarintWidth::Bits64);
        let tag = scanner.read_tag().unwrap();
        assert_eq!(tag.field(), 16);
        assert_eq!(tag.offset, 0);
        scanner.skip_field(&tag).unwrap();
        assert!(scanner.is_at_end());
    }
}
