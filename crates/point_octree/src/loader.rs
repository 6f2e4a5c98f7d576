//! Point file parsing.
//!
//! One point per line, fields separated by any run of ASCII whitespace
//! (spaces or tabs):
//!
//! ```text
//! latitude longitude elevation intensity
//! 47.377231 8.541694 408.25 117
//! ```
//!
//! The first three fields are decimals, intensity is an integer in 0..=255.
//! Blank lines are skipped and `\r\n` line endings are accepted.

use std::path::Path;

use crate::constants::FIELDS_PER_LINE;
use crate::error::{LoadError, ParseError, ParseErrorKind};
use crate::types::RawPoint;

const FIELD_NAMES: [&str; 3] = ["latitude", "longitude", "elevation"];

/// Parse a whole point file held in memory.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "loader::parse_points"))]
pub fn parse_points(text: &str) -> Result<Vec<RawPoint>, ParseError> {
  let mut points = Vec::new();
  for (line_index, line) in text.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }
    let point = parse_line(line).map_err(|kind| ParseError {
      line: line_index + 1,
      kind,
    })?;
    points.push(point);
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(count = points.len(), "parsed point records");

  Ok(points)
}

/// Read and parse a point file from disk.
pub fn read_points(path: &Path) -> Result<Vec<RawPoint>, LoadError> {
  let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(parse_points(&text)?)
}

/// Parse a single non-blank line.
pub fn parse_line(line: &str) -> Result<RawPoint, ParseErrorKind> {
  let fields: smallvec::SmallVec<[&str; FIELDS_PER_LINE]> = line.split_ascii_whitespace().collect();
  if fields.len() != FIELDS_PER_LINE {
    return Err(ParseErrorKind::FieldCount {
      expected: FIELDS_PER_LINE,
      found: fields.len(),
    });
  }

  let mut decimals = [0.0f64; 3];
  for (slot, (field, name)) in decimals.iter_mut().zip(fields.iter().zip(FIELD_NAMES)) {
    *slot = parse_decimal(field).ok_or_else(|| ParseErrorKind::InvalidDecimal {
      field: name,
      value: field.to_string(),
    })?;
  }

  let intensity = fields[3]
    .parse::<u8>()
    .map_err(|_| ParseErrorKind::InvalidIntensity {
      value: fields[3].to_string(),
    })?;

  Ok(RawPoint::new(decimals[0], decimals[1], decimals[2], intensity))
}

/// Finite decimal, `None` for garbage, NaN or infinities.
fn parse_decimal(field: &str) -> Option<f64> {
  field.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;
