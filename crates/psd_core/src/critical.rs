//! Critical radius map (C0).
//!
//! The critical radius of a pore voxel is the largest integer radius `l`
//! such that the discrete sphere of radius `l` centered at the voxel
//! (membership: squared center distance <= l*l) contains no solid voxel and
//! stays inside the volume. It is stored as the half-integer `l + 0.5` so
//! that an isolated pore voxel (l = 0) reads 0.5 and solid voxels read
//! exactly 0.

use crate::distance::boundary_distance_sq;
use crate::volume::BinaryVolume;

/// Guard against a floating-point distance landing infinitesimally above an
/// exact integer and pushing `ceil` one step too far.
pub const DISTANCE_TOLERANCE: f64 = 1e-12;

/// Compute the critical radius map from the boundary distance field.
///
/// Pore voxels hold `ceil(sqrt(d2) - tol) - 0.5`; since the padded boundary
/// guarantees a solid within distance of every pore voxel, the value is
/// always >= 0.5 there. Solid voxels hold 0.
pub fn critical_radius_map(volume: &BinaryVolume) -> Vec<f64> {
  let d2 = boundary_distance_sq(volume);
  d2.iter()
    .zip(volume.data())
    .map(|(&d2, &pore)| {
      if pore {
        (d2.sqrt() - DISTANCE_TOLERANCE).ceil() - 0.5
      } else {
        0.0
      }
    })
    .collect()
}

/// Integer radius per voxel: `round(C0 - 0.5)` for pore voxels, -1 sentinel
/// for solid ones. This is the field radius propagation operates on.
pub fn radius_field(volume: &BinaryVolume, critical: &[f64]) -> Vec<i32> {
  critical
    .iter()
    .zip(volume.data())
    .map(|(&c0, &pore)| if pore { (c0 - 0.5).round() as i32 } else { -1 })
    .collect()
}

#[cfg(test)]
#[path = "critical_test.rs"]
mod critical_test;
