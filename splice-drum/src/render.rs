//! Textual form of a pattern
//!
//! ```text
//! Saved with HW Version: 0.808-alpha
//! Tempo: 120
//! (0) kick	|x---|x---|x---|x---|
//! ```
//!
//! This is for people and fixtures. It does not round-trip: names and
//! versions that are not UTF-8 are shown with replacement characters.

use std::borrow::Cow;
use std::fmt;

use crate::STEPS_PER_TRACK;
use crate::model::{Pattern, Steps, Track};

/// Steps per bar group in the grid
const STEPS_PER_GROUP: usize = 4;

const CELL_ON: char = 'x';
const CELL_OFF: char = '-';
const GROUP_SEPARATOR: char = '|';

/// Borrowed step grid that displays as `|x---|x---|x---|x---|`
struct Grid<'a>(&'a Steps);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in self.0.chunks(STEPS_PER_GROUP) {
            write!(f, "{GROUP_SEPARATOR}")?;
            for &on in group {
                write!(f, "{}", if on { CELL_ON } else { CELL_OFF })?;
            }
        }
        write!(f, "{GROUP_SEPARATOR}")
    }
}

impl Track {
    /// The name as text, with invalid UTF-8 replaced by U+FFFD
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// The step grid alone, as printed after the track name
    pub fn step_grid(&self) -> String {
        Grid(&self.steps).to_string()
    }
}

impl Pattern {
    /// The version as text, with invalid UTF-8 replaced by U+FFFD
    pub fn version_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.version)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}\t{}",
            self.id,
            self.name_lossy(),
            Grid(&self.steps)
        )
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version_lossy())?;
        // f32 Display is the shortest form that reads back as the same value
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}

/// Render a pattern in its textual form
pub fn render_text(pattern: &Pattern) -> String {
    pattern.to_string()
}

/// Errors from [`parse_step_grid`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepGridError {
    #[error("unexpected character {0:?} in step grid (use 'x', '-' or '|')")]
    InvalidCell(char),
    #[error("step grid has {0} steps (expected 16)")]
    WrongLength(usize),
}

/// Parse a step grid such as `"x---|x---|x---|x---"`.
///
/// `x` (either case) is on and `-` is off. Separators and whitespace are
/// ignored, so the grid printed by [`render_text`] parses back.
pub fn parse_step_grid(grid: &str) -> Result<Steps, StepGridError> {
    let mut steps = [false; STEPS_PER_TRACK];
    let mut count = 0;

    for ch in grid.chars() {
        let on = match ch {
            'x' | 'X' => true,
            CELL_OFF => false,
            GROUP_SEPARATOR => continue,
            c if c.is_whitespace() => continue,
            c => return Err(StepGridError::InvalidCell(c)),
        };
        if count < STEPS_PER_TRACK {
            steps[count] = on;
        }
        count += 1;
    }

    if count != STEPS_PER_TRACK {
        return Err(StepGridError::WrongLength(count));
    }
    Ok(steps)
}
