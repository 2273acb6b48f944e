//! Card name parsing: splits the pitch annotation off a catalog name.
//!
//! Catalog names encode pitch as a parenthesised digit after the name,
//! e.g. `"Command and Conquer (2)"`. A name carries a pitch marker when it
//! either ends in `(d)` for any single digit, or contains one of the literal
//! tokens `(1)`, `(2)`, `(3)` anywhere.
//!
//! An earlier rule only checked that the third-from-last character was `(`
//! and the last was `)`. It rejected names with the marker followed by other
//! text and is no longer used.

use std::fmt;
use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::RowError;

/// Matches a single-digit pitch marker at the very end of a name.
#[allow(clippy::expect_used)]
static TRAILING_PITCH_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\d\)$").expect("pitch marker regex is valid") // Static pattern, safe to panic
});

/// Pitch markers recognised anywhere in a name.
const PITCH_MARKERS: [&str; 3] = ["(1)", "(2)", "(3)"];

/// Card color derived from the pitch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// No pitch encoded, or a pitch outside 1..=3.
    Colorless,
    /// Pitch 1.
    Red,
    /// Pitch 2.
    Yellow,
    /// Pitch 3.
    Blue,
}

impl Color {
    /// Maps a pitch value to its color.
    ///
    /// Values outside `1..=3` log a warning and yield [`Color::Colorless`].
    #[must_use]
    pub fn from_pitch(pitch_value: i64) -> Self {
        match pitch_value {
            1 => Self::Red,
            2 => Self::Yellow,
            3 => Self::Blue,
            other => {
                warn!(pitch_value = other, "card color could not be determined from pitch value");
                Self::Colorless
            }
        }
    }

    /// Returns the stable label used for display and storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colorless => "Colorless",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card name split into its display part and pitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Name with the pitch annotation removed.
    pub display_name: String,
    /// Color derived from the pitch value.
    pub color: Color,
    /// Encoded pitch value, `0` when the name carries none.
    pub pitch_value: i64,
}

/// Returns `true` if `name` carries a pitch marker.
#[must_use]
pub fn has_pitch_marker(name: &str) -> bool {
    TRAILING_PITCH_MARKER.is_match(name) || PITCH_MARKERS.iter().any(|m| name.contains(m))
}

/// Splits a catalog card name into display name, color and pitch value.
///
/// Names without a pitch marker are returned unchanged with pitch `0`.
/// When a marker is present the name is split at its last space: the left
/// part is the display name, the right part (parentheses stripped) is the
/// pitch value. Any integer is accepted; values outside `1..=3` give
/// [`Color::Colorless`] with a warning. Integers beyond the `i64` range are
/// saturated.
///
/// # Errors
///
/// Returns [`RowError::InvalidPitch`] if the token after the last space is
/// not an integer once its parentheses are stripped.
///
/// # Examples
///
/// ```
/// use harvester_core::catalog::{Color, parse_name};
///
/// let parsed = parse_name("Command and Conquer (2)").unwrap();
/// assert_eq!(parsed.display_name, "Command and Conquer");
/// assert_eq!(parsed.color, Color::Yellow);
/// assert_eq!(parsed.pitch_value, 2);
/// ```
pub fn parse_name(name: &str) -> Result<ParsedName, RowError> {
    if !has_pitch_marker(name) {
        return Ok(ParsedName {
            display_name: name.to_string(),
            color: Color::Colorless,
            pitch_value: 0,
        });
    }

    let (display_name, marker) = name.rsplit_once(' ').unwrap_or(("", name));
    let digits = marker.trim_start_matches('(').trim_end_matches(')');
    let pitch_value = match digits.parse::<i64>() {
        Ok(value) => value,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
        Err(_) => return Err(RowError::invalid_pitch(name, marker)),
    };

    Ok(ParsedName {
        display_name: display_name.to_string(),
        color: Color::from_pitch(pitch_value),
        pitch_value,
    })
}
