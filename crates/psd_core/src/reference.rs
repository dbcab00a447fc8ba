//! Brute-force reference implementation (correctness oracle).
//!
//! Computes C0, C1, and Re by direct geometric definition with no distance
//! transform. All sphere tests use exact integer squared distances, so the
//! oracle is deterministic and comparable bit-for-bit with the optimized
//! pipeline. Cost is orders of magnitude above the optimized path; keep it
//! off volumes larger than a few dozen voxels per axis.

use crate::histogram::radius_histogram;
use crate::pipeline::PsdOutput;
use crate::propagate::RadiusLabel;
use crate::volume::BinaryVolume;

/// Whether the discrete sphere of radius `l` centered at (cx, cy, cz) lies
/// entirely within pore space. Out-of-range voxels block, matching the
/// optimized field's solid padding.
fn sphere_fully_pore(volume: &BinaryVolume, cx: usize, cy: usize, cz: usize, l: i64) -> bool {
  let dims = volume.dims();
  let l2 = l * l;
  for dx in -l..=l {
    for dy in -l..=l {
      for dz in -l..=l {
        if dx * dx + dy * dy + dz * dz > l2 {
          continue;
        }
        let (x, y, z) = (cx as i64 + dx, cy as i64 + dy, cz as i64 + dz);
        if !dims.contains(x, y, z) {
          return false;
        }
        if !volume.is_pore(x as usize, y as usize, z as usize) {
          return false;
        }
      }
    }
  }
  true
}

/// Critical radius map by growing spheres voxel by voxel.
///
/// Per pore voxel the candidate radius grows from 0 until the sphere test
/// fails; the last fully-pore radius `l` is encoded as `l + 0.5`. Solid
/// voxels get 0.
pub fn critical_radius_map_reference(volume: &BinaryVolume) -> Vec<f64> {
  let dims = volume.dims();
  let mut c0 = vec![0.0f64; dims.len()];
  for x in 0..dims.nx {
    for y in 0..dims.ny {
      for z in 0..dims.nz {
        if !volume.is_pore(x, y, z) {
          continue;
        }
        // Radius 0 (the voxel itself) always holds for pore voxels.
        let mut l: i64 = 0;
        while sphere_fully_pore(volume, x, y, z, l + 1) {
          l += 1;
        }
        c0[dims.index(x, y, z)] = l as f64 + 0.5;
      }
    }
  }
  c0
}

/// Radius labels by re-expanding every center's sphere, largest radius
/// first; a voxel keeps the first (largest) label written.
pub fn propagate_labels_reference(volume: &BinaryVolume, c0: &[f64]) -> Vec<RadiusLabel> {
  let dims = volume.dims();
  let radius: Vec<i64> = c0
    .iter()
    .zip(volume.data())
    .map(|(&c, &pore)| if pore { (c - 0.5).round() as i64 } else { -1 })
    .collect();

  let mut radii: Vec<i64> = radius.iter().copied().filter(|&r| r >= 0).collect();
  radii.sort_unstable_by(|a, b| b.cmp(a));
  radii.dedup();

  let mut labels = vec![0 as RadiusLabel; dims.len()];
  for &l in &radii {
    let label = (l + 1) as RadiusLabel;
    let l2 = l * l;
    for x in 0..dims.nx {
      for y in 0..dims.ny {
        for z in 0..dims.nz {
          if radius[dims.index(x, y, z)] != l {
            continue;
          }
          // Stamp the sphere over the bounding cube.
          for dx in -l..=l {
            for dy in -l..=l {
              for dz in -l..=l {
                if dx * dx + dy * dy + dz * dz > l2 {
                  continue;
                }
                let (vx, vy, vz) = (x as i64 + dx, y as i64 + dy, z as i64 + dz);
                if !dims.contains(vx, vy, vz) {
                  continue;
                }
                let idx = dims.index(vx as usize, vy as usize, vz as usize);
                if labels[idx] == 0 {
                  labels[idx] = label;
                }
              }
            }
          }
        }
      }
    }
  }
  labels
}

/// Full reference computation: C0, C1, and Re from first principles.
pub fn compute_psd_reference(volume: &BinaryVolume) -> PsdOutput {
  let critical_radius = critical_radius_map_reference(volume);
  let labels = propagate_labels_reference(volume, &critical_radius);
  let histogram = radius_histogram(&labels, &critical_radius);
  PsdOutput {
    dims: volume.dims(),
    critical_radius,
    labels,
    histogram,
  }
}

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;
