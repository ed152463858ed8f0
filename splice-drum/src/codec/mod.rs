//! Whole-file codec
//!
//! ```text
//! 0x00  6 bytes   "SPLICE"
//! 0x06  7 bytes   padding (zero on write, ignored on read)
//! 0x0D  u64 BE    body length N (u8 in the legacy layout, body then starts at 0x0E)
//! 0x15  32 bytes  version, NUL-padded
//! 0x35  f32 LE    tempo
//! 0x39  ...       tracks until exactly N body bytes are consumed
//! 0x15+N          trailing bytes, kept verbatim
//! ```

use tracing::{debug, trace, warn};

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::SpliceError;
use crate::model::Pattern;
use crate::options::{BodyLengthWidth, CodecOptions, NameLengthWidth};
use crate::primitive::{
    read_f32_le, read_fixed_str, read_u8, read_u64_be, write_f32_le, write_fixed_str, write_u8,
    write_u64_be,
};
use crate::track::{decode_track, encode_track};
use crate::{HEADER_PADDING_LEN, MAGIC, MAGIC_LEN, MAX_NAME_LEN, VERSION_LEN};


/// Decoder and encoder for one framing layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    options: CodecOptions,
}

impl Codec {
    pub const fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Decode a complete .splice buffer.
    ///
    /// Bytes after the declared body are returned in [`Pattern::trailing`].
    pub fn decode(&self, data: &[u8]) -> Result<Pattern, SpliceError> {
        if data.len() < MAGIC_LEN || &data[..MAGIC_LEN] != MAGIC {
            return Err(SpliceError::BadMagic);
        }

        let mut cursor = ReadCursor::new(data);
        cursor.skip(MAGIC_LEN + HEADER_PADDING_LEN)?;

        let body_len = match self.options.body_length {
            BodyLengthWidth::U64Be => read_u64_be(&mut cursor)?,
            BodyLengthWidth::U8 => u64::from(read_u8(&mut cursor)?),
        };
        let available = cursor.remaining();
        let body_len = usize::try_from(body_len).map_err(|_| SpliceError::TruncatedBody {
            offset: cursor.position(),
            needed: usize::MAX,
            available,
        })?;
        cursor.set_limit(body_len)?;

        let version = read_fixed_str(&mut cursor, VERSION_LEN)?.to_vec();
        let tempo = read_f32_le(&mut cursor)?;
        if !tempo.is_finite() {
            warn!(
                version = %String::from_utf8_lossy(&version),
                tempo,
                "pattern tempo is not finite"
            );
        }

        let min_track_len = self.options.name_length.min_track_len();
        let mut tracks = Vec::with_capacity(cursor.remaining_in_limit() / min_track_len);
        while cursor.remaining_in_limit() > 0 {
            let remaining = cursor.remaining_in_limit();
            if remaining < min_track_len {
                return Err(SpliceError::TruncatedBody {
                    offset: cursor.position(),
                    needed: min_track_len,
                    available: remaining,
                });
            }
            let track = decode_track(&mut cursor, tracks.len(), &self.options)?;
            trace!(
                index = tracks.len(),
                id = track.id,
                name = %track.name_lossy(),
                "decoded track"
            );
            tracks.push(track);
        }

        cursor.clear_limit();
        let trailing = cursor.read_tail().to_vec();

        debug!(
            body_len,
            version = %String::from_utf8_lossy(&version),
            tempo,
            tracks = tracks.len(),
            trailing = trailing.len(),
            "decoded pattern"
        );

        Ok(Pattern {
            version,
            tempo,
            tracks,
            trailing,
        })
    }

    /// Encode a pattern, including any trailing bytes it carries
    pub fn encode(&self, pattern: &Pattern) -> Result<Vec<u8>, SpliceError> {
        let mut body = WriteCursor::with_capacity(pattern.body_len(self.options.name_length));
        write_fixed_str(&mut body, &pattern.version, VERSION_LEN, "version")?;
        write_f32_le(&mut body, pattern.tempo);
        for track in &pattern.tracks {
            encode_track(&mut body, track, &self.options)?;
        }
        let body = body.into_inner();

        let header_len = self.options.body_length.header_len();
        let mut out = WriteCursor::with_capacity(header_len + body.len() + pattern.trailing.len());
        out.write(MAGIC);
        out.write_zeros(HEADER_PADDING_LEN);
        match self.options.body_length {
            BodyLengthWidth::U64Be => write_u64_be(&mut out, body.len() as u64),
            BodyLengthWidth::U8 => {
                let len = u8::try_from(body.len())
                    .map_err(|_| SpliceError::oversized("body", body.len(), u8::MAX as usize))?;
                write_u8(&mut out, len);
            }
        }
        out.write(&body);
        out.write(&pattern.trailing);

        debug!(
            body_len = body.len(),
            total = out.position(),
            "encoded pattern"
        );
        Ok(out.into_inner())
    }

    /// Size `encode` would produce for this pattern, after the same field checks
    pub fn encoded_len(&self, pattern: &Pattern) -> Result<usize, SpliceError> {
        if pattern.version.len() > VERSION_LEN {
            return Err(SpliceError::oversized(
                "version",
                pattern.version.len(),
                VERSION_LEN,
            ));
        }
        let max_name = match self.options.name_length {
            NameLengthWidth::U32Be => MAX_NAME_LEN,
            NameLengthWidth::U8 => u8::MAX as usize,
        };
        if let Some(track) = pattern.tracks.iter().find(|t| t.name.len() > max_name) {
            return Err(SpliceError::oversized("track name", track.name.len(), max_name));
        }

        let body_len = pattern.body_len(self.options.name_length);
        if body_len as u64 > self.options.body_length.max_body_len() {
            return Err(SpliceError::oversized(
                "body",
                body_len,
                self.options.body_length.max_body_len() as usize,
            ));
        }
        Ok(self.options.body_length.header_len() + body_len + pattern.trailing.len())
    }
}

/// Decode with the reference layout
pub fn decode(data: &[u8]) -> Result<Pattern, SpliceError> {
    Codec::default().decode(data)
}

/// Encode with the reference layout
pub fn encode(pattern: &Pattern) -> Result<Vec<u8>, SpliceError> {
    Codec::default().encode(pattern)
}
