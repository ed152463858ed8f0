//! Fixed-width and length-prefixed field codecs
//!
//! Every numeric field carries its byte order in the function name. Nothing
//! here consults a default endianness.

use crate::cursor::{ReadCursor, ShortRead, WriteCursor};
use crate::error::SpliceError;

// =============================================================================
// Readers
// =============================================================================

/// Read a single byte
pub fn read_u8(cursor: &mut ReadCursor<'_>) -> Result<u8, ShortRead> {
    Ok(cursor.read_array::<1>()?[0])
}

/// Read a 16-bit big-endian integer
pub fn read_u16_be(cursor: &mut ReadCursor<'_>) -> Result<u16, ShortRead> {
    cursor.read_array().map(u16::from_be_bytes)
}

/// Read a 32-bit big-endian integer
pub fn read_u32_be(cursor: &mut ReadCursor<'_>) -> Result<u32, ShortRead> {
    cursor.read_array().map(u32::from_be_bytes)
}

/// Read a 32-bit little-endian integer
pub fn read_u32_le(cursor: &mut ReadCursor<'_>) -> Result<u32, ShortRead> {
    cursor.read_array().map(u32::from_le_bytes)
}

/// Read a 64-bit big-endian integer
pub fn read_u64_be(cursor: &mut ReadCursor<'_>) -> Result<u64, ShortRead> {
    cursor.read_array().map(u64::from_be_bytes)
}

/// Read an IEEE-754 binary32 in little-endian order
pub fn read_f32_le(cursor: &mut ReadCursor<'_>) -> Result<f32, ShortRead> {
    cursor.read_array().map(f32::from_le_bytes)
}

/// Read an `n`-byte NUL-padded text field.
///
/// Everything from the first NUL on is dropped. A field without a NUL is
/// taken whole. The bytes are returned as stored, with no text decoding.
pub fn read_fixed_str<'a>(
    cursor: &mut ReadCursor<'a>,
    n: usize,
) -> Result<&'a [u8], ShortRead> {
    let bytes = cursor.read_exact(n)?;
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    Ok(&bytes[..len])
}

/// Read a byte string prefixed by a one-byte length
pub fn read_len8_str<'a>(cursor: &mut ReadCursor<'a>) -> Result<&'a [u8], ShortRead> {
    let len = read_u8(cursor)? as usize;
    cursor.read_exact(len)
}

/// Read a byte string prefixed by a 32-bit big-endian length of at most `max`.
///
/// A length the remaining input cannot hold is a short read, whatever its
/// size; only a length that fits the input but exceeds `max` is
/// [`SpliceError::OversizedField`].
pub fn read_len32_str<'a>(
    cursor: &mut ReadCursor<'a>,
    max: usize,
    field: &'static str,
) -> Result<&'a [u8], SpliceError> {
    let len = read_u32_be(cursor)? as usize;
    let available = cursor.remaining_in_limit();
    if len > available {
        return Err(ShortRead {
            offset: cursor.position(),
            requested: len,
            available,
        }
        .into());
    }
    if len > max {
        return Err(SpliceError::oversized(field, len, max));
    }
    Ok(cursor.read_exact(len)?)
}

// =============================================================================
// Writers
// =============================================================================

pub fn write_u8(out: &mut WriteCursor, val: u8) {
    out.write(&[val]);
}

pub fn write_u16_be(out: &mut WriteCursor, val: u16) {
    out.write(&val.to_be_bytes());
}

pub fn write_u32_be(out: &mut WriteCursor, val: u32) {
    out.write(&val.to_be_bytes());
}

pub fn write_u32_le(out: &mut WriteCursor, val: u32) {
    out.write(&val.to_le_bytes());
}

pub fn write_u64_be(out: &mut WriteCursor, val: u64) {
    out.write(&val.to_be_bytes());
}

pub fn write_f32_le(out: &mut WriteCursor, val: f32) {
    out.write(&val.to_le_bytes());
}

/// Write bytes into an `n`-byte field, padded with NULs
pub fn write_fixed_str(
    out: &mut WriteCursor,
    bytes: &[u8],
    n: usize,
    field: &'static str,
) -> Result<(), SpliceError> {
    if bytes.len() > n {
        return Err(SpliceError::oversized(field, bytes.len(), n));
    }
    out.write(bytes);
    out.write_zeros(n - bytes.len());
    Ok(())
}

/// Write a byte string prefixed by a one-byte length
pub fn write_len8_str(
    out: &mut WriteCursor,
    bytes: &[u8],
    field: &'static str,
) -> Result<(), SpliceError> {
    let len = u8::try_from(bytes.len())
        .map_err(|_| SpliceError::oversized(field, bytes.len(), u8::MAX as usize))?;
    write_u8(out, len);
    out.write(bytes);
    Ok(())
}

/// Write a byte string prefixed by a 32-bit big-endian length of at most `max`
pub fn write_len32_str(
    out: &mut WriteCursor,
    bytes: &[u8],
    max: usize,
    field: &'static str,
) -> Result<(), SpliceError> {
    if bytes.len() > max {
        return Err(SpliceError::oversized(field, bytes.len(), max));
    }
    // max never exceeds u32 for the fields we write
    write_u32_be(out, bytes.len() as u32);
    out.write(bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_byte_orders() {
        let data = [
            0x12, 0x34, // u16 be
            0x00, 0x00, 0x00, 0xC5, // u32 be
            0xC5, 0x00, 0x00, 0x00, // u32 le
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02, // u64 be
        ];
        let mut cursor = ReadCursor::new(&data);

        assert_eq!(read_u16_be(&mut cursor).unwrap(), 0x1234);
        assert_eq!(read_u32_be(&mut cursor).unwrap(), 0xC5);
        assert_eq!(read_u32_le(&mut cursor).unwrap(), 0xC5);
        assert_eq!(read_u64_be(&mut cursor).unwrap(), 0x0102);
        assert!(read_u8(&mut cursor).is_err());
    }

    #[test]
    fn test_f32_little_endian() {
        let data = [0x00, 0x00, 0x70, 0x43, 0xCD, 0xCC, 0xC4, 0x42];
        let mut cursor = ReadCursor::new(&data);

        assert_eq!(read_f32_le(&mut cursor).unwrap(), 240.0);
        assert_eq!(read_f32_le(&mut cursor).unwrap(), 98.4);

        let mut out = WriteCursor::new();
        write_f32_le(&mut out, 240.0);
        assert_eq!(out.as_slice(), &[0x00, 0x00, 0x70, 0x43]);
    }

    #[test]
    fn test_writers_match_byte_order() {
        let mut out = WriteCursor::new();
        write_u8(&mut out, 7);
        write_u16_be(&mut out, 0x0102);
        write_u32_be(&mut out, 0x0A0B0C0D);
        write_u32_le(&mut out, 0x0A0B0C0D);
        write_u64_be(&mut out, 36);
        assert_eq!(
            out.as_slice(),
            &[
                7, 1, 2, 0x0A, 0x0B, 0x0C, 0x0D, 0x0D, 0x0C, 0x0B, 0x0A, 0, 0, 0, 0, 0, 0, 0, 36
            ]
        );
    }

    #[test]
    fn test_fixed_str_trims_at_first_nul() {
        let data = *b"0.909\0\0\0";
        let mut cursor = ReadCursor::new(&data);
        assert_eq!(read_fixed_str(&mut cursor, 8).unwrap(), b"0.909");
        assert_eq!(cursor.position(), 8);

        let data = *b"ab\0cd\0\0\0";
        let mut cursor = ReadCursor::new(&data);
        assert_eq!(read_fixed_str(&mut cursor, 8).unwrap(), b"ab");
    }

    #[test]
    fn test_fixed_str_without_nul_is_whole_field() {
        let data = *b"abcd";
        let mut cursor = ReadCursor::new(&data);
        assert_eq!(read_fixed_str(&mut cursor, 4).unwrap(), b"abcd");
    }

    #[test]
    fn test_fixed_str_keeps_high_bytes() {
        let data = [0xFFu8; 32];
        let mut cursor = ReadCursor::new(&data);
        let field = read_fixed_str(&mut cursor, 32).unwrap();
        assert_eq!(field, &data[..]);

        let mut out = WriteCursor::new();
        write_fixed_str(&mut out, field, 32, "version").unwrap();
        assert_eq!(out.as_slice(), &data[..]);
    }

    #[test]
    fn test_fixed_str_write_pads_and_rejects_long() {
        let mut out = WriteCursor::new();
        write_fixed_str(&mut out, b"0.9", 6, "version").unwrap();
        assert_eq!(out.as_slice(), b"0.9\0\0\0");

        let err = write_fixed_str(&mut out, b"toolong", 6, "version").unwrap_err();
        assert_eq!(
            err,
            SpliceError::OversizedField {
                field: "version",
                len: 7,
                max: 6
            }
        );
        assert_eq!(out.position(), 6);
    }

    #[test]
    fn test_len8_str() {
        let mut out = WriteCursor::new();
        write_len8_str(&mut out, b"kick", "name").unwrap();
        assert_eq!(out.as_slice(), b"\x04kick");

        let data = out.into_inner();
        let mut cursor = ReadCursor::new(&data);
        assert_eq!(read_len8_str(&mut cursor).unwrap(), b"kick");

        let truncated = b"\x05kick";
        let mut cursor = ReadCursor::new(truncated);
        assert!(read_len8_str(&mut cursor).is_err());

        let long = vec![b'a'; 256];
        assert!(write_len8_str(&mut WriteCursor::new(), &long, "name").is_err());
    }

    #[test]
    fn test_len32_str() {
        let data = b"\x00\x00\x00\x07Maracas";
        let mut cursor = ReadCursor::new(data);
        assert_eq!(read_len32_str(&mut cursor, 255, "name").unwrap(), b"Maracas");

        let data = b"\x00\x00\x00\x07Mara";
        let mut cursor = ReadCursor::new(data);
        assert!(matches!(
            read_len32_str(&mut cursor, 255, "name"),
            Err(SpliceError::TruncatedBody { needed: 7, available: 4, .. })
        ));
    }

    #[test]
    fn test_len32_str_over_max() {
        // the input holds all 256 bytes, so the length itself is the problem
        let mut data = vec![0x00, 0x00, 0x01, 0x00];
        data.extend_from_slice(&[b'n'; 256]);
        let mut cursor = ReadCursor::new(&data);
        assert!(matches!(
            read_len32_str(&mut cursor, 255, "name"),
            Err(SpliceError::OversizedField { len: 256, max: 255, .. })
        ));
    }

    #[test]
    fn test_len32_str_length_past_input_is_truncation() {
        let data = b"\xFF\xFF\xFF\xFFkick";
        let mut cursor = ReadCursor::new(data);
        assert_eq!(
            read_len32_str(&mut cursor, 255, "name"),
            Err(SpliceError::TruncatedBody {
                offset: 4,
                needed: u32::MAX as usize,
                available: 4
            })
        );
    }
}
