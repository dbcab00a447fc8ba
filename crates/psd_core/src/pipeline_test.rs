use super::*;
use crate::histogram::MIN_BINS;
use crate::volume::BinaryVolume;

#[test]
fn test_all_solid_short_circuits_to_zeros() {
  let dims = VolumeDims::new(6, 7, 8);
  let output = compute_psd(&BinaryVolume::solid(dims), &PsdConfig::default());
  assert_eq!(output.dims, dims);
  assert_eq!(output.critical_radius, vec![0.0; dims.len()]);
  assert_eq!(output.labels, vec![0; dims.len()]);
  assert_eq!(output.histogram, vec![0; MIN_BINS]);
  assert_eq!(output.labeled_count(), 0);
  assert_eq!(output.max_label(), 0);
}

#[test]
fn test_isolated_pore_voxel() {
  let dims = VolumeDims::new(3, 3, 3);
  let volume = BinaryVolume::from_fn(dims, |x, y, z| x == 1 && y == 1 && z == 1);
  let output = compute_psd(&volume, &PsdConfig::default());

  assert_eq!(output.critical_radius[dims.index(1, 1, 1)], 0.5);
  assert_eq!(output.labels[dims.index(1, 1, 1)], 1);
  assert_eq!(output.histogram[0], 1);
  assert!(output.histogram[1..].iter().all(|&c| c == 0));
}

#[test]
fn test_two_disjoint_blobs() {
  // Blobs with maximal inscribed radii 3 and 2: histogram must be non-zero
  // at bins 4 and 3 and empty past bin 4.
  let dims = VolumeDims::new(21, 11, 11);
  let volume = crate::synth::two_blobs(dims, 3.0, 2.0);
  let output = compute_psd(&volume, &PsdConfig::default());

  assert!(output.histogram[3] > 0, "bin r1+1 empty");
  assert!(output.histogram[2] > 0, "bin r2+1 empty");
  assert!(output.histogram[4..].iter().all(|&c| c == 0));
  assert_eq!(output.max_label(), 4);
}

#[test]
fn test_histogram_conservation() {
  let dims = VolumeDims::new(12, 10, 9);
  let volume = crate::synth::sphere_pack(dims, 10, 1.0, 3.0, 77);
  let output = compute_psd(&volume, &PsdConfig::default());
  assert_eq!(
    output.histogram.iter().sum::<u64>(),
    output.labeled_count() as u64
  );
  assert_eq!(output.labeled_count(), volume.pore_count());
}

#[test]
fn test_parallel_flag_matches_serial() {
  let dims = VolumeDims::new(10, 10, 10);
  let volume = crate::synth::sphere_pack(dims, 8, 1.0, 3.0, 31);
  let serial = compute_psd(&volume, &PsdConfig::new().with_parallel(false));
  let parallel = compute_psd(&volume, &PsdConfig::new().with_parallel(true));
  assert_eq!(serial, parallel);
}

#[test]
fn test_timed_reports_stats() {
  let dims = VolumeDims::new(8, 8, 8);
  let volume = crate::synth::sphere_pack(dims, 5, 1.0, 2.5, 11);
  let (output, stats) = compute_psd_timed(&volume, &PsdConfig::default());
  assert!(stats.radius_count > 0);
  assert_eq!(stats.labeled_count, output.labeled_count());
}
