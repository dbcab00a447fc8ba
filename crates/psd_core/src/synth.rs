//! Synthetic porous volumes for tests and benchmarks.
//!
//! Deterministic generators only: geometric primitives plus a seeded
//! xorshift for pseudo-random sphere packs. No RNG crate, so test and bench
//! inputs are reproducible across platforms.

use glam::Vec3A;

use crate::volume::{BinaryVolume, VolumeDims};

/// Single spherical pore in a solid block.
pub fn sphere(dims: VolumeDims, center: [f32; 3], radius: f32) -> BinaryVolume {
  let c = Vec3A::from_array(center);
  BinaryVolume::from_fn(dims, |x, y, z| {
    Vec3A::new(x as f32, y as f32, z as f32).distance_squared(c) <= radius * radius
  })
}

/// Two disjoint spherical pores of different radii, placed along X at
/// integer voxel centers so the maximal inscribed radii are exactly the
/// requested ones.
///
/// Panics if the spheres would touch; equivalence tests rely on the blobs
/// being independent.
pub fn two_blobs(dims: VolumeDims, r1: f32, r2: f32) -> BinaryVolume {
  let cy = ((dims.ny - 1) / 2) as f32;
  let cz = ((dims.nz - 1) / 2) as f32;
  let c1 = Vec3A::new(r1 + 1.0, cy, cz);
  let c2 = Vec3A::new(dims.nx as f32 - r2 - 2.0, cy, cz);
  assert!(
    c1.distance(c2) > r1 + r2 + 2.0,
    "blobs overlap: widen the volume or shrink the radii"
  );
  BinaryVolume::from_fn(dims, |x, y, z| {
    let p = Vec3A::new(x as f32, y as f32, z as f32);
    p.distance_squared(c1) <= r1 * r1 || p.distance_squared(c2) <= r2 * r2
  })
}

/// Xorshift64* step; cheap deterministic pseudo-randomness.
#[inline]
fn xorshift(state: &mut u64) -> u64 {
  let mut x = *state;
  x ^= x << 13;
  x ^= x >> 7;
  x ^= x << 17;
  *state = x;
  x.wrapping_mul(0x2545_f491_4f6c_dd1d)
}

/// Overlapping sphere pack: a porous medium with a broad radius spectrum.
///
/// `count` spheres with radii in `[r_min, r_max]` are scattered uniformly
/// from the given seed.
pub fn sphere_pack(dims: VolumeDims, count: usize, r_min: f32, r_max: f32, seed: u64) -> BinaryVolume {
  // Scramble before forcing nonzero so adjacent seeds stay distinct.
  let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
  let mut spheres = Vec::with_capacity(count);
  for _ in 0..count {
    let fx = (xorshift(&mut state) % 1024) as f32 / 1024.0;
    let fy = (xorshift(&mut state) % 1024) as f32 / 1024.0;
    let fz = (xorshift(&mut state) % 1024) as f32 / 1024.0;
    let fr = (xorshift(&mut state) % 1024) as f32 / 1024.0;
    spheres.push((
      Vec3A::new(fx * dims.nx as f32, fy * dims.ny as f32, fz * dims.nz as f32),
      r_min + fr * (r_max - r_min),
    ));
  }
  BinaryVolume::from_fn(dims, |x, y, z| {
    let p = Vec3A::new(x as f32, y as f32, z as f32);
    spheres.iter().any(|&(c, r)| p.distance_squared(c) <= r * r)
  })
}

/// Per-voxel pseudo-random pore noise with the given pore probability
/// (0..=256 scale). Worst case for the propagation loop: many tiny radii.
pub fn noise(dims: VolumeDims, pore_per_256: u64, seed: u64) -> BinaryVolume {
  BinaryVolume::from_fn(dims, |x, y, z| {
    let mut state = seed
      .wrapping_mul(0x9e37_79b9_7f4a_7c15)
      .wrapping_add(((x * 73_856_093) ^ (y * 19_349_663) ^ (z * 83_492_791)) as u64)
      | 1;
    xorshift(&mut state) % 256 < pore_per_256
  })
}

#[cfg(test)]
#[path = "synth_test.rs"]
mod synth_test;
