//! Codec options
//!
//! The historical producers of .splice files disagree on a few framing
//! details. Each disagreement is a switch here; the defaults are the
//! reference layout.

use serde::{Deserialize, Serialize};

use crate::{HEADER_PADDING_LEN, MAGIC_LEN, STEPS_PER_TRACK};

/// Width of the body-length field that follows the header padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyLengthWidth {
    /// 8-byte big-endian length, body starts at offset 21
    #[default]
    U64Be,
    /// 1-byte length, body starts at offset 14
    U8,
}

impl BodyLengthWidth {
    /// Size of the length field in bytes
    pub const fn field_len(self) -> usize {
        match self {
            Self::U64Be => 8,
            Self::U8 => 1,
        }
    }

    /// Largest body the field can describe
    pub const fn max_body_len(self) -> u64 {
        match self {
            Self::U64Be => u64::MAX,
            Self::U8 => u8::MAX as u64,
        }
    }

    /// Offset of the first body byte from the start of the file
    pub const fn header_len(self) -> usize {
        MAGIC_LEN + HEADER_PADDING_LEN + self.field_len()
    }
}

/// Width of the length prefix in front of a track name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLengthWidth {
    /// 4-byte big-endian length (tracks are `21 + len` bytes)
    #[default]
    U32Be,
    /// 1-byte length (tracks are `18 + len` bytes)
    U8,
}

impl NameLengthWidth {
    pub const fn field_len(self) -> usize {
        match self {
            Self::U32Be => 4,
            Self::U8 => 1,
        }
    }

    /// Size of a track with an empty name
    pub const fn min_track_len(self) -> usize {
        1 + self.field_len() + STEPS_PER_TRACK
    }
}

/// How step bytes other than 0x00 and 0x01 are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Reject them with [`SpliceError::InvalidStep`](crate::SpliceError::InvalidStep)
    #[default]
    Strict,
    /// Read any non-zero byte as "on"
    Tolerant,
}

/// Framing switches for [`Codec`](crate::Codec)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    pub body_length: BodyLengthWidth,
    pub name_length: NameLengthWidth,
    pub steps: StepMode,
}

impl CodecOptions {
    /// Layout of the historical .splice fixtures: one-byte body length,
    /// 32-bit name lengths.
    pub const fn legacy() -> Self {
        Self {
            body_length: BodyLengthWidth::U8,
            name_length: NameLengthWidth::U32Be,
            steps: StepMode::Strict,
        }
    }

    pub const fn with_body_length(mut self, width: BodyLengthWidth) -> Self {
        self.body_length = width;
        self
    }

    pub const fn with_name_length(mut self, width: NameLengthWidth) -> Self {
        self.name_length = width;
        self
    }

    pub const fn with_steps(mut self, mode: StepMode) -> Self {
        self.steps = mode;
        self
    }
}
