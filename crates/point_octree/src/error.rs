//! Error types for building, parsing and loading point clouds.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::PointIndex;

/// Errors raised while building a store or index.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
  /// No points: there is no extent to normalize against and nothing to index.
  #[error("cannot build a point cloud from an empty point set")]
  EmptyInput,

  /// A coordinate is NaN or infinite.
  #[error("point {index} has a non-finite coordinate")]
  NonFiniteCoordinate { index: PointIndex },

  /// More points than a [`PointIndex`] can address.
  #[error("{count} points exceed the addressable point index range")]
  TooManyPoints { count: usize },
}

/// What went wrong on a single line of a point file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
  #[error("expected {expected} fields, found {found}")]
  FieldCount { expected: usize, found: usize },

  #[error("invalid {field} value {value:?}")]
  InvalidDecimal { field: &'static str, value: String },

  #[error("invalid intensity {value:?} (expected an integer in 0..=255)")]
  InvalidIntensity { value: String },
}

/// A malformed line in a point file.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
  /// 1-based line number.
  pub line: usize,
  pub kind: ParseErrorKind,
}

/// Errors raised by [`crate::PointCloud::load`].
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("failed to read {path}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error(transparent)]
  Parse(#[from] ParseError),

  #[error(transparent)]
  Build(#[from] BuildError),
}
