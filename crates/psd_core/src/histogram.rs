//! Radius histogram (Re): the pore-size distribution itself.
//!
//! Bin `k` (1-based) counts voxels carrying label `k`, i.e. voxels belonging
//! to a pore of radius `k - 1`. Conceptually the bins are centered on the
//! integers with edges at 0.5, 1.5, 2.5, ... so every integer label falls in
//! exactly one bin.

use crate::propagate::RadiusLabel;

/// Minimum bin count, kept for output-shape compatibility with downstream
/// plotting collaborators. Bins past the actual maximum label stay zero.
pub const MIN_BINS: usize = 100;

/// Count labels into the radius histogram.
///
/// The bin count is `max(round(max(C0) - 0.5 + 1), MIN_BINS)`; with labels
/// encoded as `radius + 1` that equals the largest label present (or the
/// floor). A volume with no pore voxels yields `MIN_BINS` zeros.
pub fn radius_histogram(labels: &[RadiusLabel], critical: &[f64]) -> Vec<u64> {
  let max_c0 = critical.iter().copied().fold(0.0f64, f64::max);
  let max_radius_index = (max_c0 - 0.5 + 1.0).round().max(0.0) as usize;
  let bins = max_radius_index.max(MIN_BINS);

  let mut counts = vec![0u64; bins];
  for &label in labels {
    if label > 0 {
      counts[label as usize - 1] += 1;
    }
  }
  counts
}

#[cfg(test)]
#[path = "histogram_test.rs"]
mod histogram_test;
