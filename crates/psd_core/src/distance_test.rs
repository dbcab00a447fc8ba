use super::*;
use crate::volume::{BinaryVolume, VolumeDims};

/// Brute-force squared distance to the nearest solid voxel or padding cell,
/// scanning the padded grid directly.
fn brute_boundary_distance_sq(volume: &BinaryVolume) -> Vec<f64> {
  let dims = volume.dims();
  let mut out = vec![0.0f64; dims.len()];
  for x in 0..dims.nx {
    for y in 0..dims.ny {
      for z in 0..dims.nz {
        if !volume.is_pore(x, y, z) {
          continue;
        }
        let mut best = i64::MAX;
        for px in -1..=dims.nx as i64 {
          for py in -1..=dims.ny as i64 {
            for pz in -1..=dims.nz as i64 {
              let interior = dims.contains(px, py, pz);
              let solid =
                !interior || !volume.is_pore(px as usize, py as usize, pz as usize);
              if solid {
                let (dx, dy, dz) = (px - x as i64, py - y as i64, pz - z as i64);
                best = best.min(dx * dx + dy * dy + dz * dz);
              }
            }
          }
        }
        out[dims.index(x, y, z)] = best as f64;
      }
    }
  }
  out
}

#[test]
fn test_all_solid_is_zero_everywhere() {
  let volume = BinaryVolume::solid(VolumeDims::new(3, 4, 5));
  let d2 = boundary_distance_sq(&volume);
  assert!(d2.iter().all(|&d| d == 0.0));
}

#[test]
fn test_single_pore_voxel_has_distance_one() {
  let volume = BinaryVolume::from_fn(VolumeDims::new(1, 1, 1), |_, _, _| true);
  let d2 = boundary_distance_sq(&volume);
  assert_eq!(d2, vec![1.0]);
}

#[test]
fn test_all_pore_cube_distances() {
  let dims = VolumeDims::new(3, 3, 3);
  let volume = BinaryVolume::pore(dims);
  let d2 = boundary_distance_sq(&volume);

  // Center is two steps from the conceptual solid padding.
  assert_eq!(d2[dims.index(1, 1, 1)], 4.0);
  // Every boundary voxel is one step from the padding.
  assert_eq!(d2[dims.index(0, 0, 0)], 1.0);
  assert_eq!(d2[dims.index(2, 1, 0)], 1.0);
  assert_eq!(d2[dims.index(1, 1, 0)], 1.0);
}

#[test]
fn test_interior_solid_voxel() {
  let dims = VolumeDims::new(5, 5, 5);
  let volume = BinaryVolume::from_fn(dims, |x, y, z| !(x == 2 && y == 2 && z == 2));
  let d2 = boundary_distance_sq(&volume);

  // Face neighbors of the solid voxel.
  assert_eq!(d2[dims.index(2, 2, 3)], 1.0);
  assert_eq!(d2[dims.index(1, 2, 2)], 1.0);
  // Edge-diagonal neighbor: sqrt(2) to the solid beats the boundary.
  assert_eq!(d2[dims.index(3, 3, 2)], 2.0);
  // Solid voxel itself.
  assert_eq!(d2[dims.index(2, 2, 2)], 0.0);
}

#[test]
fn test_matches_brute_force_on_asymmetric_volume() {
  let dims = VolumeDims::new(6, 4, 5);
  let volume = BinaryVolume::from_fn(dims, |x, y, z| (x * 7 + y * 3 + z * 5) % 4 != 0);
  assert_eq!(boundary_distance_sq(&volume), brute_boundary_distance_sq(&volume));
}

#[test]
fn test_matches_brute_force_on_all_pore_slab() {
  let dims = VolumeDims::new(7, 3, 2);
  let volume = BinaryVolume::pore(dims);
  assert_eq!(boundary_distance_sq(&volume), brute_boundary_distance_sq(&volume));
}

#[test]
fn test_seeded_transform_distances_to_center_set() {
  // One seed in a 1x1x7 line: squared distances grow quadratically.
  let dims = VolumeDims::new(1, 1, 7);
  let far = unreachable_sq(dims);
  let mut field = vec![far; dims.len()];
  field[3] = 0.0;
  edt_sq_in_place(&mut field, dims);
  assert_eq!(field, vec![9.0, 4.0, 1.0, 0.0, 1.0, 4.0, 9.0]);
}

#[test]
fn test_seedless_transform_stays_unreachable() {
  let dims = VolumeDims::new(2, 2, 2);
  let far = unreachable_sq(dims);
  let mut field = vec![far; dims.len()];
  edt_sq_in_place(&mut field, dims);
  // No seed anywhere: every value stays above the grid diagonal.
  assert!(field.iter().all(|&d| d > (dims.nx * dims.nx + dims.ny * dims.ny + dims.nz * dims.nz) as f64));
}
