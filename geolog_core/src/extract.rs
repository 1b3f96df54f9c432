//! Regex extraction of coordinate readings from log lines.
//!
//! Two independent patterns are applied to every line: the receiver's own
//! fix ("Real GPS", comma decimal separator) and the raw antenna reading
//! (`rawLongitude=`/`rawLatitude=` key-value tokens). A line can carry
//! both, either, or neither.

use regex::Regex;

use crate::error::Result;

/// A latitude/longitude pair as read from a log line. Never range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Marker color distinguishing which pattern produced a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MarkerColor {
    /// Receiver fix ("Real GPS" lines).
    #[serde(rename = "#00ff00")]
    Real,
    /// Raw antenna reading (`rawLatitude`/`rawLongitude` lines).
    #[serde(rename = "#ff0000")]
    Raw,
}

impl MarkerColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Real => "#00ff00",
            Self::Raw => "#ff0000",
        }
    }
}

/// A coordinate together with the marker color of the pattern that matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedCoordinate {
    pub coordinate: Coordinate,
    pub color: MarkerColor,
}

/// Compiled matchers for both line formats. Build once, reuse across files.
pub struct LineExtractor {
    real: Regex,
    raw: Regex,
}

impl LineExtractor {
    /// Compile both patterns.
    ///
    /// # Errors
    /// Returns an error if either pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            real: Regex::new(r"Real GPS\s*(-?\d+,\d+),(-?\d+,\d+)")?,
            raw: Regex::new(r"rawLongitude=([\d.-]+),.+rawLatitude=([\d.-]+)")?,
        })
    }

    /// Apply both patterns to one line, real-reading first.
    ///
    /// Yields zero, one, or two tagged coordinates. A capture that fails to
    /// parse as `f64` counts as no-match for that pattern.
    #[must_use]
    pub fn extract_line(&self, line: &str) -> Vec<TaggedCoordinate> {
        let mut found = Vec::new();
        if let Some(tagged) = self.extract_real(line) {
            found.push(tagged);
        }
        if let Some(tagged) = self.extract_raw(line) {
            found.push(tagged);
        }
        found
    }

    /// "Real GPS" lines write decimals with a comma, latitude first.
    fn extract_real(&self, line: &str) -> Option<TaggedCoordinate> {
        let caps = self.real.captures(line)?;
        let latitude = caps[1].replace(',', ".").parse().ok()?;
        let longitude = caps[2].replace(',', ".").parse().ok()?;
        Some(TaggedCoordinate {
            coordinate: Coordinate {
                latitude,
                longitude,
            },
            color: MarkerColor::Real,
        })
    }

    /// Raw readings carry the longitude token before the latitude token.
    fn extract_raw(&self, line: &str) -> Option<TaggedCoordinate> {
        let caps = self.raw.captures(line)?;
        let longitude = caps[1].parse().ok()?;
        let latitude = caps[2].parse().ok()?;
        Some(TaggedCoordinate {
            coordinate: Coordinate {
                latitude,
                longitude,
            },
            color: MarkerColor::Raw,
        })
    }
}
