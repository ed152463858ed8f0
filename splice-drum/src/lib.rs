//! Splice-Drum: decoder and encoder for `.splice` drum pattern files
//!
//! A `.splice` file holds one drum pattern: the version of the software that
//! saved it, a tempo, and a list of instrument tracks, each with a sixteen
//! step on/off grid. This crate reads such files into a [`Pattern`] and
//! writes a [`Pattern`] back out byte-for-byte.
//!
//! # Key Features
//!
//! - **Pure codec**: works on byte slices, no I/O in the decode/encode path
//! - **Bounded reads**: nothing is read past the declared body length
//! - **Exact round-trip**: bytes after the body are kept and written back
//! - **Layout switches**: legacy one-byte body lengths, short track names and
//!   tolerant step bytes via [`CodecOptions`]
//!
//! # Format Overview
//!
//! - 6-byte magic `SPLICE` and 7 bytes of padding
//! - Body length (u64 big-endian; u8 in the legacy layout)
//! - Body: 32-byte version string, little-endian f32 tempo, tracks
//! - Anything after the body is trailing data
//!
//! # Usage
//!
//! ```ignore
//! use splice_drum::{decode, encode, render_text};
//!
//! let data = std::fs::read("pattern_1.splice").unwrap();
//! let mut pattern = decode(&data).unwrap();
//! print!("{}", render_text(&pattern));
//!
//! if let Some(cowbell) = pattern.track_mut("cowbell") {
//!     cowbell.set_all_steps(true);
//! }
//! let bytes = encode(&pattern).unwrap();
//! ```

mod codec;
mod error;
mod model;
mod options;
mod render;

pub mod cursor;
pub mod fs;
pub mod primitive;
pub mod track;

pub use codec::{Codec, decode, encode};
pub use error::SpliceError;
pub use model::{Pattern, Steps, Track};
pub use options::{BodyLengthWidth, CodecOptions, NameLengthWidth, StepMode};
pub use render::{StepGridError, parse_step_grid, render_text};

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes at the start of every file
pub const MAGIC: &[u8; 6] = b"SPLICE";

/// Length of [`MAGIC`]
pub const MAGIC_LEN: usize = 6;

/// Padding between the magic and the body length
pub const HEADER_PADDING_LEN: usize = 7;

/// Size of the NUL-padded version field
pub const VERSION_LEN: usize = 32;

/// Size of the tempo field
pub const TEMPO_LEN: usize = 4;

/// Version and tempo: the smallest valid body
pub const PREAMBLE_LEN: usize = VERSION_LEN + TEMPO_LEN;

/// Steps in every track
pub const STEPS_PER_TRACK: usize = 16;

/// Maximum track name length
pub const MAX_NAME_LEN: usize = 255;

/// Largest file the file helpers will read (16 MiB)
pub const MAX_SPLICE_BYTES: u64 = 16 * 1024 * 1024;

// =============================================================================
// Tests
// =============================================================================
