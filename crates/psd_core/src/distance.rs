//! Squared Euclidean distance transform for 3D voxel grids.
//!
//! Separable Felzenszwalb-Huttenlocher lower-envelope transform: three 1D
//! passes (Z, then Y, then X) over squared distances. Squared distances
//! between voxel centers are integers, which f64 represents exactly, so the
//! transform's threshold comparisons agree bit-for-bit with the brute-force
//! reference geometry.
//!
//! Two seeding conventions are used by the engine:
//!
//! - [`boundary_distance_sq`]: seeds at solid voxels over a grid padded by
//!   one layer of solid on all six faces, cropped back afterwards. Volume
//!   edges therefore behave exactly like interior solid walls.
//! - [`edt_sq_in_place`]: caller-seeded field (used by radius propagation
//!   with per-radius center sets, where the boundary is not blocking).
//!
//! Unseeded voxels start at a finite sentinel above the grid diagonal
//! rather than infinity, keeping the envelope arithmetic finite.

use crate::volume::{BinaryVolume, VolumeDims};

/// Seed value for voxels with no source: strictly larger than any squared
/// distance realizable inside the grid, but finite.
#[inline]
pub(crate) fn unreachable_sq(dims: VolumeDims) -> f64 {
  let d = dims.nx * dims.nx + dims.ny * dims.ny + dims.nz * dims.nz;
  (d + 1) as f64
}

/// One-dimensional squared-distance transform (lower envelope of parabolas).
///
/// `f` holds per-site seed costs (0 at sources), `d` receives the squared
/// distances. `v` and `z` are scratch buffers of length `n` and `n + 1`.
fn edt_1d(f: &[f64], d: &mut [f64], v: &mut [usize], z: &mut [f64]) {
  let n = f.len();
  debug_assert_eq!(d.len(), n);
  debug_assert!(v.len() >= n && z.len() >= n + 1);

  let mut k = 0usize;
  v[0] = 0;
  z[0] = f64::NEG_INFINITY;
  z[1] = f64::INFINITY;

  for q in 1..n {
    let mut s = intersection(q, v[k], f);
    while k > 0 && s <= z[k] {
      k -= 1;
      s = intersection(q, v[k], f);
    }
    k += 1;
    v[k] = q;
    z[k] = s;
    z[k + 1] = f64::INFINITY;
  }

  k = 0;
  for (q, dq) in d.iter_mut().enumerate() {
    while z[k + 1] < q as f64 {
      k += 1;
    }
    let dx = q as f64 - v[k] as f64;
    *dq = dx * dx + f[v[k]];
  }
}

/// Intersection abscissa of the parabolas rooted at sites `i` and `j`.
#[inline]
fn intersection(i: usize, j: usize, f: &[f64]) -> f64 {
  let fi = f[i] + (i * i) as f64;
  let fj = f[j] + (j * j) as f64;
  (fi - fj) / (2.0 * (i as f64 - j as f64))
}

/// In-place 3D squared-distance transform.
///
/// `field` must hold `0.0` at source voxels and [`unreachable_sq`] (or any
/// value above it is never needed) elsewhere, laid out per
/// [`VolumeDims::index`]. On return each voxel holds the squared Euclidean
/// distance to the nearest source, or a value above the grid diagonal if no
/// source exists.
pub(crate) fn edt_sq_in_place(field: &mut [f64], dims: VolumeDims) {
  let (nx, ny, nz) = (dims.nx, dims.ny, dims.nz);
  debug_assert_eq!(field.len(), dims.len());

  let max_axis = nx.max(ny).max(nz);
  let mut input = vec![0.0f64; max_axis];
  let mut output = vec![0.0f64; max_axis];
  let mut v = vec![0usize; max_axis];
  let mut z = vec![0.0f64; max_axis + 1];

  // Pass 1: Z rows (contiguous).
  if nz > 1 {
    for row in field.chunks_exact_mut(nz) {
      input[..nz].copy_from_slice(row);
      edt_1d(&input[..nz], &mut output[..nz], &mut v, &mut z);
      row.copy_from_slice(&output[..nz]);
    }
  }

  // Pass 2: Y columns.
  if ny > 1 {
    for x in 0..nx {
      for zc in 0..nz {
        for y in 0..ny {
          input[y] = field[dims.index(x, y, zc)];
        }
        edt_1d(&input[..ny], &mut output[..ny], &mut v, &mut z);
        for y in 0..ny {
          field[dims.index(x, y, zc)] = output[y];
        }
      }
    }
  }

  // Pass 3: X columns.
  if nx > 1 {
    for y in 0..ny {
      for zc in 0..nz {
        for x in 0..nx {
          input[x] = field[dims.index(x, y, zc)];
        }
        edt_1d(&input[..nx], &mut output[..nx], &mut v, &mut z);
        for x in 0..nx {
          field[dims.index(x, y, zc)] = output[x];
        }
      }
    }
  }
}

/// Squared distance from every voxel to the nearest solid voxel, with the
/// volume treated as wrapped in one layer of solid on all six faces.
///
/// Solid voxels (and the conceptual padding) are at distance 0; the padding
/// is discarded before returning, so the result has the volume's own dims.
pub fn boundary_distance_sq(volume: &BinaryVolume) -> Vec<f64> {
  let dims = volume.dims();
  let padded = VolumeDims::new(dims.nx + 2, dims.ny + 2, dims.nz + 2);
  let far = unreachable_sq(padded);

  // Padding stays 0.0 (solid); interior pore voxels start unreachable.
  let mut field = vec![0.0f64; padded.len()];
  for x in 0..dims.nx {
    for y in 0..dims.ny {
      for z in 0..dims.nz {
        if volume.is_pore(x, y, z) {
          field[padded.index(x + 1, y + 1, z + 1)] = far;
        }
      }
    }
  }

  edt_sq_in_place(&mut field, padded);

  // Crop the padding layer.
  let mut out = Vec::with_capacity(dims.len());
  for x in 0..dims.nx {
    for y in 0..dims.ny {
      let start = padded.index(x + 1, y + 1, 1);
      out.extend_from_slice(&field[start..start + dims.nz]);
    }
  }
  out
}

#[cfg(test)]
#[path = "distance_test.rs"]
mod distance_test;
