//! Radius propagation (C1).
//!
//! Assigns every voxel the largest critical-radius sphere that covers it,
//! modeling how mercury fills connected pore space up to a
//! pressure-equivalent radius.
//!
//! For each distinct radius `s` present in the field, the voxels with
//! critical radius exactly `s` ("centers") are dilated by `s`: a distance
//! transform from the center set, thresholded at squared distance `s*s`,
//! marks every covered voxel with label `s + 1` in a private candidate
//! buffer. The buffers are then reduced by element-wise maximum.
//!
//! Because the label `s + 1` grows monotonically with `s`, the max-reduction
//! yields "largest covering radius wins" no matter in which order radii are
//! processed or buffers merged. The serial path is the same fold; there is
//! no separate first-writer-wins code path to argue equivalent.

use rayon::prelude::*;
use smallvec::SmallVec;

use crate::distance::{edt_sq_in_place, unreachable_sq};
use crate::executor::ExecutionContext;
use crate::volume::VolumeDims;

/// Per-voxel radius label: 0 = unassigned/solid, `s + 1` = covered by a
/// radius-`s` sphere. u16 holds radii far beyond `min_axis / 2 + 1`.
pub type RadiusLabel = u16;

/// Distinct non-negative radii present in the field, descending.
///
/// Descending order is cosmetic (the reduction is order-independent); it
/// keeps logs and debugging aligned with the mercury-intrusion picture of
/// large throats filling first.
pub fn distinct_radii(radius: &[i32]) -> SmallVec<[i32; 32]> {
  let mut radii: SmallVec<[i32; 32]> = SmallVec::new();
  for &r in radius {
    if r >= 0 && !radii.contains(&r) {
      radii.push(r);
    }
  }
  radii.sort_unstable_by(|a, b| b.cmp(a));
  radii
}

/// Candidate label buffer for one radius value: label `s + 1` at every voxel
/// within Euclidean distance `s` of a voxel with `radius == s`.
pub(crate) fn dilate_radius(radius: &[i32], dims: VolumeDims, s: i32) -> Vec<RadiusLabel> {
  debug_assert!(s >= 0);
  let label = (s + 1) as RadiusLabel;

  // Radius 0 dilates to the centers themselves; skip the transform.
  if s == 0 {
    return radius
      .iter()
      .map(|&r| if r == 0 { label } else { 0 })
      .collect();
  }

  let far = unreachable_sq(dims);
  let mut field: Vec<f64> = radius.iter().map(|&r| if r == s { 0.0 } else { far }).collect();
  edt_sq_in_place(&mut field, dims);

  let threshold = (s as f64) * (s as f64);
  field
    .iter()
    .map(|&d2| if d2 <= threshold { label } else { 0 })
    .collect()
}

/// Element-wise maximum merge of two candidate buffers.
pub(crate) fn merge_max(mut acc: Vec<RadiusLabel>, other: Vec<RadiusLabel>) -> Vec<RadiusLabel> {
  debug_assert_eq!(acc.len(), other.len());
  for (a, b) in acc.iter_mut().zip(other) {
    *a = (*a).max(b);
  }
  acc
}

/// Propagate radius labels over the volume.
///
/// `radius` is the integer critical-radius field (-1 for solid voxels, see
/// [`crate::critical::radius_field`]). Serial and parallel execution share
/// the dilate-then-max formulation and produce bit-identical labels.
pub fn propagate_labels(
  radius: &[i32],
  dims: VolumeDims,
  ctx: &ExecutionContext,
) -> Vec<RadiusLabel> {
  debug_assert_eq!(radius.len(), dims.len());

  let radii = distinct_radii(radius);
  tracing::debug!(
    radius_count = radii.len(),
    parallel = ctx.is_parallel(),
    "propagating radius labels"
  );
  if radii.is_empty() {
    // All solid: nothing to dilate.
    return vec![0; radius.len()];
  }

  match ctx {
    ExecutionContext::Serial => radii
      .iter()
      .map(|&s| dilate_radius(radius, dims, s))
      .fold(vec![0; radius.len()], merge_max),
    ExecutionContext::Parallel(pool) => pool.install(|| {
      radii
        .as_slice()
        .par_iter()
        .map(|&s| dilate_radius(radius, dims, s))
        .reduce(|| vec![0; radius.len()], merge_max)
    }),
  }
}

#[cfg(test)]
#[path = "propagate_test.rs"]
mod propagate_test;
