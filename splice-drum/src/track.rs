//! Track record codec
//!
//! ```text
//! 0x00      u8        id
//! 0x01      u32 BE    name length L (u8 in the short-name layout)
//! 0x05      L bytes   name
//! 0x05+L    16 bytes  steps, 0x00 = off, 0x01 = on
//! ```

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::SpliceError;
use crate::model::{Steps, Track};
use crate::options::{CodecOptions, NameLengthWidth, StepMode};
use crate::primitive::{
    read_len8_str, read_len32_str, read_u8, write_len8_str, write_len32_str, write_u8,
};
use crate::{MAX_NAME_LEN, STEPS_PER_TRACK};

const STEP_OFF: u8 = 0x00;
const STEP_ON: u8 = 0x01;

/// Decode one track. `index` is the track's position, used in errors.
pub fn decode_track(
    cursor: &mut ReadCursor<'_>,
    index: usize,
    options: &CodecOptions,
) -> Result<Track, SpliceError> {
    let id = read_u8(cursor)?;
    let name = match options.name_length {
        NameLengthWidth::U32Be => read_len32_str(cursor, MAX_NAME_LEN, "track name")?,
        NameLengthWidth::U8 => read_len8_str(cursor)?,
    }
    .to_vec();
    let raw: [u8; STEPS_PER_TRACK] = cursor.read_array()?;
    let steps = decode_steps(&raw, index, options.steps)?;

    Ok(Track { id, name, steps })
}

fn decode_steps(
    raw: &[u8; STEPS_PER_TRACK],
    track: usize,
    mode: StepMode,
) -> Result<Steps, SpliceError> {
    let mut steps = [false; STEPS_PER_TRACK];
    for (step, (&value, slot)) in raw.iter().zip(steps.iter_mut()).enumerate() {
        *slot = match (value, mode) {
            (STEP_OFF, _) => false,
            (STEP_ON, _) | (_, StepMode::Tolerant) => true,
            (_, StepMode::Strict) => {
                return Err(SpliceError::InvalidStep { track, step, value });
            }
        };
    }
    Ok(steps)
}

/// Encode one track
pub fn encode_track(
    out: &mut WriteCursor,
    track: &Track,
    options: &CodecOptions,
) -> Result<(), SpliceError> {
    write_u8(out, track.id);
    match options.name_length {
        NameLengthWidth::U32Be => write_len32_str(out, &track.name, MAX_NAME_LEN, "track name")?,
        NameLengthWidth::U8 => write_len8_str(out, &track.name, "track name")?,
    }
    for &on in &track.steps {
        write_u8(out, if on { STEP_ON } else { STEP_OFF });
    }
    Ok(())
}
