//! Pattern and track value types
//!
//! These are plain values. Field limits (name and version lengths) are
//! checked by the codec when encoding, not here.
//!
//! Names and versions are kept as the bytes found on the wire. Files in the
//! wild are ASCII, but nothing stops a producer from writing other bytes,
//! and those must survive a decode/encode cycle unchanged. Use
//! [`Track::name_lossy`] and [`Pattern::version_lossy`] for display.

use serde::{Deserialize, Serialize};

use crate::options::NameLengthWidth;
use crate::{PREAMBLE_LEN, STEPS_PER_TRACK};

/// One-bar step grid: `true` triggers the instrument on that step
pub type Steps = [bool; STEPS_PER_TRACK];

/// One instrument line of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Track {
    /// Instrument id (not required to be unique)
    pub id: u8,
    /// Instrument name, at most 255 bytes on the wire
    pub name: Vec<u8>,
    pub steps: Steps,
}

impl Track {
    pub fn new(id: u8, name: impl Into<Vec<u8>>, steps: Steps) -> Self {
        Self {
            id,
            name: name.into(),
            steps,
        }
    }

    /// A track with every step off
    pub fn silent(id: u8, name: impl Into<Vec<u8>>) -> Self {
        Self::new(id, name, [false; STEPS_PER_TRACK])
    }

    /// Switch every step on or off
    pub fn set_all_steps(&mut self, on: bool) {
        self.steps = [on; STEPS_PER_TRACK];
    }

    /// Number of steps that trigger
    pub fn active_steps(&self) -> usize {
        self.steps.iter().filter(|&&on| on).count()
    }

    /// Serialised size of this track
    pub fn encoded_len(&self, name_length: NameLengthWidth) -> usize {
        name_length.min_track_len() + self.name.len()
    }
}

/// A decoded drum pattern
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pattern {
    /// Version string of the software that saved the pattern
    pub version: Vec<u8>,
    /// Beats per minute
    pub tempo: f32,
    /// Tracks in wire order
    pub tracks: Vec<Track>,
    /// Bytes found after the declared body, re-emitted verbatim on encode
    #[serde(default)]
    pub trailing: Vec<u8>,
}

impl Pattern {
    pub fn new(version: impl Into<Vec<u8>>, tempo: f32) -> Self {
        Self {
            version: version.into(),
            tempo,
            tracks: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn with_tracks(mut self, tracks: impl IntoIterator<Item = Track>) -> Self {
        self.tracks.extend(tracks);
        self
    }

    pub fn push_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// First track with the given name
    pub fn track(&self, name: impl AsRef<[u8]>) -> Option<&Track> {
        let name = name.as_ref();
        self.tracks.iter().find(|t| t.name == name)
    }

    /// First track with the given name, mutably
    pub fn track_mut(&mut self, name: impl AsRef<[u8]>) -> Option<&mut Track> {
        let name = name.as_ref();
        self.tracks.iter_mut().find(|t| t.name == name)
    }

    /// Size of the body (version, tempo and tracks) once encoded
    pub fn body_len(&self, name_length: NameLengthWidth) -> usize {
        PREAMBLE_LEN
            + self
                .tracks
                .iter()
                .map(|t| t.encoded_len(name_length))
                .sum::<usize>()
    }
}
