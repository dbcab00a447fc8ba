//! psd_core - Pore-size distribution engine for binary voxel volumes
//!
//! Reproduces a mercury-intrusion-porosimetry-like measurement from image
//! data: for each pore voxel, the radius of the largest inscribed
//! pore-space sphere covering it, aggregated into a volume-weighted
//! histogram of pore radii.
//!
//! # Pipeline
//!
//! ```text
//! BinaryVolume ──► DistanceField ──► CriticalRadiusMap (C0)
//!                                          │
//!                                          ▼
//!                  RadiusHistogram (Re) ◄── RadiusPropagation (C1)
//! ```
//!
//! - **Distance field**: squared Euclidean distance to the nearest solid
//!   voxel, volume edges treated as solid walls.
//! - **Critical radius (C0)**: largest integer-radius discrete sphere of
//!   pore space centered at each voxel, stored as `radius + 0.5`.
//! - **Propagation (C1)**: every voxel takes the label `s + 1` of the
//!   largest radius-`s` sphere covering it. Per-radius dilations are
//!   independent and reduce by element-wise maximum, so serial and parallel
//!   execution are interchangeable bit-for-bit.
//! - **Histogram (Re)**: voxel counts per radius bin, 100-bin floor.
//!
//! A brute-force [`reference`] implementation recomputes all three outputs
//! from the geometric definitions and serves as the correctness oracle.
//!
//! # Example
//!
//! ```ignore
//! use psd_core::{compute_psd, BinaryVolume, PsdConfig, VolumeDims};
//!
//! let dims = VolumeDims::new(128, 128, 128);
//! let volume = BinaryVolume::from_binary_u8(dims, &bytes)?;
//!
//! let output = compute_psd(&volume, &PsdConfig::new().with_parallel(true));
//! for (bin, count) in output.histogram.iter().enumerate() {
//!   println!("radius {}: {} voxels", bin + 1, count);
//! }
//! ```

pub mod error;
pub mod volume;

pub use error::PsdError;
pub use volume::{BinaryVolume, VolumeDims};

// Distance transform and the derived fields
pub mod critical;
pub mod distance;
pub use critical::{critical_radius_map, radius_field, DISTANCE_TOLERANCE};
pub use distance::boundary_distance_sq;

// Radius propagation with explicit execution context
pub mod executor;
pub mod propagate;
pub use executor::ExecutionContext;
pub use propagate::{propagate_labels, RadiusLabel};

// Histogram reduction
pub mod histogram;
pub use histogram::{radius_histogram, MIN_BINS};

// Pipeline entry points
pub mod pipeline;
pub use pipeline::{compute_psd, compute_psd_timed, PsdConfig, PsdOutput, PsdStats};

// Brute-force oracle for cross-validation
pub mod reference;
pub use reference::compute_psd_reference;

// Synthetic volumes for tests and benches
pub mod synth;
