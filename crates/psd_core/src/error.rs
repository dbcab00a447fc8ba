//! Error taxonomy for volume construction.
//!
//! All errors are construction-time: once a [`crate::BinaryVolume`] exists it
//! is valid by construction and the compute pipeline is infallible. Parallel
//! resource unavailability is a logged fallback, never an error.

use thiserror::Error;

/// Errors produced while validating input volumes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PsdError {
  /// One or more dimensions are zero.
  #[error("volume dimensions must be non-zero, got {nx}x{ny}x{nz}")]
  EmptyVolume { nx: usize, ny: usize, nz: usize },

  /// Flat data buffer length does not match the stated dimensions.
  #[error("data length {actual} does not match volume size {expected}")]
  DataLength { expected: usize, actual: usize },

  /// A byte other than 0 or 1 was found while importing a two-valued grid.
  /// The core never guesses binarization thresholds; coercion of grayscale
  /// data is the caller's responsibility.
  #[error("non-binary value {value} at index {index} (expected 0 or 1)")]
  NonBinaryValue { index: usize, value: u8 },
}
