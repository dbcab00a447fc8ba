//! PSD pipeline orchestrator.
//!
//! Runs the full distance -> critical radius -> propagation -> histogram
//! chain over a binary volume. This is the main entry point for callers;
//! the stages are also exported individually for tooling and tests.
//!
//! ```ignore
//! use psd_core::{compute_psd, BinaryVolume, PsdConfig, VolumeDims};
//!
//! let volume = BinaryVolume::from_binary_u8(VolumeDims::new(64, 64, 64), &bytes)?;
//! let output = compute_psd(&volume, &PsdConfig::default().with_parallel(true));
//! let psd = output.histogram;
//! ```

use web_time::Instant;

use crate::critical::{critical_radius_map, radius_field};
use crate::executor::ExecutionContext;
use crate::histogram::{radius_histogram, MIN_BINS};
use crate::propagate::{distinct_radii, propagate_labels, RadiusLabel};
use crate::volume::{BinaryVolume, VolumeDims};

/// Configuration for a PSD computation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PsdConfig {
  /// Request parallel radius propagation. If no parallel execution resource
  /// is available the computation silently runs serially with identical
  /// results.
  pub parallel: bool,
}

impl PsdConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }
}

/// Result of a PSD computation.
#[derive(Clone, Debug, PartialEq)]
pub struct PsdOutput {
  /// Volume dimensions the flat fields are laid out with.
  pub dims: VolumeDims,

  /// Critical radius per voxel (C0): half-integers for pore voxels, 0 for
  /// solid.
  pub critical_radius: Vec<f64>,

  /// Radius label per voxel (C1): 0 unassigned, `s + 1` for the largest
  /// covering sphere radius `s`.
  pub labels: Vec<RadiusLabel>,

  /// Voxel counts per radius bin (Re), at least
  /// [`MIN_BINS`](crate::histogram::MIN_BINS) bins long.
  pub histogram: Vec<u64>,
}

impl PsdOutput {
  /// Number of voxels covered by some sphere (label > 0). Always equals the
  /// histogram sum.
  pub fn labeled_count(&self) -> usize {
    self.labels.iter().filter(|&&l| l > 0).count()
  }

  /// Largest label present, 0 for a fully solid volume.
  pub fn max_label(&self) -> RadiusLabel {
    self.labels.iter().copied().max().unwrap_or(0)
  }
}

/// Timing and size statistics from a PSD run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PsdStats {
  /// Number of distinct radius values propagated.
  pub radius_count: usize,
  /// Number of labeled voxels.
  pub labeled_count: usize,
  /// Total processing time in microseconds.
  pub total_us: u64,
}

/// Compute the pore-size distribution of a binary volume.
///
/// Infallible: shape and content validation happen when the
/// [`BinaryVolume`] is constructed. A volume with no pore voxels yields
/// all-zero C0/C1 and an all-zero histogram.
pub fn compute_psd(volume: &BinaryVolume, config: &PsdConfig) -> PsdOutput {
  let _span = tracing::info_span!("compute_psd", parallel = config.parallel).entered();
  let dims = volume.dims();

  // Degenerate case: nothing to erode or dilate.
  if volume.pore_count() == 0 {
    return PsdOutput {
      dims,
      critical_radius: vec![0.0; dims.len()],
      labels: vec![0; dims.len()],
      histogram: vec![0; MIN_BINS],
    };
  }

  let critical_radius = {
    let _span = tracing::info_span!("critical_radius").entered();
    critical_radius_map(volume)
  };

  let labels = {
    let _span = tracing::info_span!("propagate").entered();
    let radius = radius_field(volume, &critical_radius);
    let ctx = ExecutionContext::from_flag(config.parallel);
    propagate_labels(&radius, dims, &ctx)
  };

  let histogram = radius_histogram(&labels, &critical_radius);

  PsdOutput {
    dims,
    critical_radius,
    labels,
    histogram,
  }
}

/// Same as [`compute_psd`] but returns timing stats.
pub fn compute_psd_timed(volume: &BinaryVolume, config: &PsdConfig) -> (PsdOutput, PsdStats) {
  let start = Instant::now();
  let output = compute_psd(volume, config);
  let total_us = start.elapsed().as_micros() as u64;

  let radius = radius_field(volume, &output.critical_radius);
  let stats = PsdStats {
    radius_count: distinct_radii(&radius).len(),
    labeled_count: output.labeled_count(),
    total_us,
  };

  (output, stats)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
