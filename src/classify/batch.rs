//! Batch classification over slices of readings.

use rayon::prelude::*;
use tracing::debug;

use crate::classify::radius;
use crate::error::{Error, ErrorKind};

/// Classify every reading; `output[i]` is the radius for `readings[i]`.
pub fn classify_batch(readings: &[f64]) -> Vec<f64> {
    let out: Vec<f64> = readings.iter().map(|&e| radius(e)).collect();
    debug!(n = out.len(), "classified readings");
    out
}

/// Classify into a caller-provided buffer.
///
/// Both slices must have the same length; a mismatch is rejected before
/// anything is written.
pub fn classify_into(readings: &[f64], out: &mut [f64]) -> Result<(), Error> {
    if readings.len() != out.len() {
        return Err(Error::new(
            ErrorKind::LengthMismatch,
            format!(
                "Output buffer holds {} values but {} readings were supplied.",
                out.len(),
                readings.len()
            ),
        ));
    }

    for (slot, &e) in out.iter_mut().zip(readings) {
        *slot = radius(e);
    }
    debug!(n = readings.len(), "classified readings into buffer");
    Ok(())
}

/// Same as [`classify_batch`], evaluated on the rayon pool.
///
/// Output order matches input order.
pub fn classify_batch_par(readings: &[f64]) -> Vec<f64> {
    let out: Vec<f64> = readings.par_iter().map(|&e| radius(e)).collect();
    debug!(n = out.len(), "classified readings (parallel)");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_yields_empty_output() {
        assert!(classify_batch(&[]).is_empty());
        assert!(classify_batch_par(&[]).is_empty());
        let mut out: [f64; 0] = [];
        classify_into(&[], &mut out).unwrap();
    }

    #[test]
    fn single_reading_scenarios() {
        assert_eq!(classify_batch(&[0.0]), vec![10.0]);
        assert_eq!(classify_batch(&[51_125.9]), vec![10.0]);
        assert_eq!(classify_batch(&[51_126.0]), vec![16.67]);
        assert_eq!(classify_batch(&[1_000_000.0]), vec![23.33]);
        assert_eq!(classify_batch(&[1_212_860.6667]), vec![40.0]);
    }

    #[test]
    fn mixed_batch_keeps_positions() {
        let readings = [51_126.0, 0.0, 1_212_860.6667, 1e9];
        let expected = vec![16.67, 10.0, 40.0, 40.0];
        assert_eq!(classify_batch(&readings), expected);
        assert_eq!(classify_batch_par(&readings), expected);

        let mut out = [0.0; 4];
        classify_into(&readings, &mut out).unwrap();
        assert_eq!(out.to_vec(), expected);
    }

    #[test]
    fn classify_into_rejects_mismatched_buffers() {
        let mut out = [-1.0; 2];
        let err = classify_into(&[1.0, 2.0, 3.0], &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
        // Nothing written on rejection.
        assert_eq!(out, [-1.0, -1.0]);
    }

    #[test]
    fn parallel_matches_sequential_on_large_input() {
        let readings: Vec<f64> = (0..10_000).map(|i| i as f64 * 250.0).collect();
        assert_eq!(classify_batch_par(&readings), classify_batch(&readings));
    }
}
