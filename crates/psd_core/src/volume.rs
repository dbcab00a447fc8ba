//! Binary voxel volume and 3D grid indexing.
//!
//! The engine consumes an already-binarized 3D grid: `true` = pore (void
//! space), `false` = solid. Loading, grayscale conversion, and thresholding
//! are external collaborators; this type only validates shape and two-valued
//! content.
//!
//! # Memory Layout
//!
//! ```text
//! index = (x * ny + y) * nz + z
//! ```
//!
//! X is the major axis, Z the minor one, so sequential Z access is
//! cache-friendly and the per-row distance transform passes run over
//! contiguous memory.

use crate::error::PsdError;

/// Grid dimensions of a voxel volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeDims {
  pub nx: usize,
  pub ny: usize,
  pub nz: usize,
}

impl VolumeDims {
  pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
    Self { nx, ny, nz }
  }

  /// Total voxel count.
  #[inline]
  pub const fn len(&self) -> usize {
    self.nx * self.ny * self.nz
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.nx == 0 || self.ny == 0 || self.nz == 0
  }

  /// Convert 3D coordinates to linear index (x major, z minor).
  #[inline(always)]
  pub const fn index(&self, x: usize, y: usize, z: usize) -> usize {
    (x * self.ny + y) * self.nz + z
  }

  /// Convert linear index back to 3D coordinates.
  #[inline(always)]
  pub const fn coord(&self, idx: usize) -> (usize, usize, usize) {
    let z = idx % self.nz;
    let y = (idx / self.nz) % self.ny;
    let x = idx / (self.nz * self.ny);
    (x, y, z)
  }

  /// Whether signed coordinates fall inside the grid.
  #[inline(always)]
  pub const fn contains(&self, x: i64, y: i64, z: i64) -> bool {
    x >= 0 && y >= 0 && z >= 0 && (x as usize) < self.nx && (y as usize) < self.ny && (z as usize) < self.nz
  }

  /// Smallest axis length. Bounds the largest inscribed sphere radius.
  #[inline]
  pub fn min_axis(&self) -> usize {
    self.nx.min(self.ny).min(self.nz)
  }
}

/// Immutable binary voxel volume (`true` = pore, `false` = solid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryVolume {
  dims: VolumeDims,
  data: Vec<bool>,
}

impl BinaryVolume {
  /// Create a volume from a flat boolean buffer.
  ///
  /// # Errors
  ///
  /// [`PsdError::EmptyVolume`] if any dimension is zero,
  /// [`PsdError::DataLength`] if the buffer does not match the dims.
  pub fn new(dims: VolumeDims, data: Vec<bool>) -> Result<Self, PsdError> {
    if dims.is_empty() {
      return Err(PsdError::EmptyVolume {
        nx: dims.nx,
        ny: dims.ny,
        nz: dims.nz,
      });
    }
    if data.len() != dims.len() {
      return Err(PsdError::DataLength {
        expected: dims.len(),
        actual: data.len(),
      });
    }
    Ok(Self { dims, data })
  }

  /// Create a volume by evaluating a predicate at every coordinate.
  ///
  /// # Panics
  ///
  /// Panics if any dimension is zero. Intended for test and synthetic
  /// geometry construction where dims are compile-time known.
  pub fn from_fn<F>(dims: VolumeDims, mut pore: F) -> Self
  where
    F: FnMut(usize, usize, usize) -> bool,
  {
    assert!(!dims.is_empty(), "volume dimensions must be non-zero");
    let mut data = Vec::with_capacity(dims.len());
    for x in 0..dims.nx {
      for y in 0..dims.ny {
        for z in 0..dims.nz {
          data.push(pore(x, y, z));
        }
      }
    }
    Self { dims, data }
  }

  /// Import a two-valued byte grid (1 = pore, 0 = solid).
  ///
  /// # Errors
  ///
  /// [`PsdError::NonBinaryValue`] on the first byte outside {0, 1}, plus the
  /// shape errors of [`BinaryVolume::new`]. No partial computation happens on
  /// malformed input.
  pub fn from_binary_u8(dims: VolumeDims, bytes: &[u8]) -> Result<Self, PsdError> {
    if dims.is_empty() {
      return Err(PsdError::EmptyVolume {
        nx: dims.nx,
        ny: dims.ny,
        nz: dims.nz,
      });
    }
    if bytes.len() != dims.len() {
      return Err(PsdError::DataLength {
        expected: dims.len(),
        actual: bytes.len(),
      });
    }
    let mut data = Vec::with_capacity(bytes.len());
    for (index, &value) in bytes.iter().enumerate() {
      match value {
        0 => data.push(false),
        1 => data.push(true),
        _ => return Err(PsdError::NonBinaryValue { index, value }),
      }
    }
    Ok(Self { dims, data })
  }

  /// Fully solid volume.
  pub fn solid(dims: VolumeDims) -> Self {
    Self::from_fn(dims, |_, _, _| false)
  }

  /// Fully pore volume.
  pub fn pore(dims: VolumeDims) -> Self {
    Self::from_fn(dims, |_, _, _| true)
  }

  #[inline]
  pub fn dims(&self) -> VolumeDims {
    self.dims
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Whether the voxel at the given coordinates is pore.
  #[inline(always)]
  pub fn is_pore(&self, x: usize, y: usize, z: usize) -> bool {
    self.data[self.dims.index(x, y, z)]
  }

  /// Whether the voxel at the given linear index is pore.
  #[inline(always)]
  pub fn is_pore_idx(&self, idx: usize) -> bool {
    self.data[idx]
  }

  /// Flat voxel data, x major / z minor.
  #[inline]
  pub fn data(&self) -> &[bool] {
    &self.data
  }

  /// Number of pore voxels.
  pub fn pore_count(&self) -> usize {
    self.data.iter().filter(|&&p| p).count()
  }

  /// Pore fraction of the total volume.
  pub fn porosity(&self) -> f64 {
    self.pore_count() as f64 / self.len() as f64
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
