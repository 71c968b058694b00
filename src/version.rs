//! Dotted numeric versions
//!
//! A [`Version`] is a sequence of non-negative integers written as a
//! dot-separated string (`0.2.0`, `1.10`, `3`). Ordering pads the shorter
//! side with zero segments, so `1.2` and `1.2.0` compare equal.
//!
//! Segments are kept as normalized digit strings rather than fixed-width
//! integers, so neither the segment count nor a segment's magnitude is
//! bounded.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{EnvError, Result, version::invalid};

/// A parsed, immutable dotted version
#[derive(Debug, Clone)]
pub struct Version {
    /// The string exactly as written (surrounding whitespace trimmed)
    raw: String,
    /// Digit strings with leading zeros removed; `"0"` for zero
    segments: Vec<String>,
}

impl Version {
    /// Parse a dotted version string
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidVersion`] for an empty string, an empty
    /// segment (`1..2`), or a segment containing anything but ASCII digits.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(invalid(input, "version is empty"));
        }

        let segments = raw
            .split('.')
            .map(|segment| normalize_segment(raw, segment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The version as originally written
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn normalize_segment(raw: &str, segment: &str) -> Result<String> {
    if segment.is_empty() {
        return Err(invalid(raw, "empty segment"));
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(
            raw,
            format!("segment '{segment}' is not a non-negative integer"),
        ));
    }
    let trimmed = segment.trim_start_matches('0');
    Ok(if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    })
}

/// Compare two normalized digit strings numerically
fn compare_segment(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Total order over versions, treating missing trailing segments as zero
pub fn compare(a: &Version, b: &Version) -> Ordering {
    let len = a.segments.len().max(b.segments.len());
    (0..len)
        .map(|i| {
            let left = a.segments.get(i).map_or("0", String::as_str);
            let right = b.segments.get(i).map_or("0", String::as_str);
            compare_segment(left, right)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
