//! Equal-width bucketing of raw samples into a `HistogramProto`.

use crate::error::{Error, Result};
use crate::proto::tensorboard as pb;

/// Buckets `values` into `bins` equal-width buckets spanning the sample
/// range.
///
/// When every sample is equal the range is widened to `[v - 0.5, v + 0.5]`.
/// Buckets are half-open except the last, which also holds the maximum. The
/// proto stores only upper edges: its first bucket is unbounded below, so the
/// lower edge of the first bucket is dropped.
///
/// Fails with [`Error::TooManyBins`] if the range overflows or is too narrow
/// for `bins` strictly increasing edges.
pub fn histogram(values: &[f64], bins: usize) -> Result<pb::HistogramProto> {
    if bins == 0 {
        return Err(Error::InvalidBins);
    }
    // `total_cmp` sorts NaNs to the extremes, so they surface in the range
    // check below.
    let min = values
        .iter()
        .copied()
        .min_by(f64::total_cmp)
        .ok_or(Error::EmptyHistogram)?;
    let max = values
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .ok_or(Error::EmptyHistogram)?;
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::NonFiniteRange { min, max });
    }

    let (first, last) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    if !(last - first).is_finite() {
        return Err(Error::TooManyBins { bins });
    }
    let edges = linspace(first, last, bins + 1);
    // Too narrow a range for `bins` collapses neighbouring edges.
    if edges.windows(2).any(|w| w[0] >= w[1]) {
        return Err(Error::TooManyBins { bins });
    }
    let norm = bins as f64 / (last - first);

    let mut bucket = vec![0.0; bins];
    let mut sum = 0.0;
    let mut sum_squares = 0.0;
    for &z in values {
        let mut idx = (((z - first) * norm) as usize).min(bins - 1);
        // Correct for rounding in `norm` so each sample lands in the bucket
        // whose edges actually contain it.
        if idx > 0 && z < edges[idx] {
            idx -= 1;
        } else if idx < bins - 1 && z >= edges[idx + 1] {
            idx += 1;
        }
        bucket[idx] += 1.0;
        sum += z;
        sum_squares += z * z;
    }

    Ok(pb::HistogramProto {
        min,
        max,
        num: values.len() as f64,
        sum,
        sum_squares,
        bucket_limit: edges[1..].to_vec(),
        bucket,
    })
}

fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let div = (num - 1) as f64;
    let step = (stop - start) / div;
    let mut out: Vec<f64> = (0..num).map(|i| i as f64 * step + start).collect();
    if let Some(end) = out.last_mut() {
        *end = stop;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_small_histogram() {
        let h = histogram(&[0.0, 1.0, 1.5, 4.0], 4).unwrap();
        assert_eq!(h.min, 0.0);
        assert_eq!(h.max, 4.0);
        assert_eq!(h.num, 4.0);
        assert_eq!(h.sum, 6.5);
        assert_eq!(h.sum_squares, 0.0 + 1.0 + 2.25 + 16.0);
        assert_eq!(h.bucket_limit, vec![1.0, 2.0, 3.0, 4.0]);
        // 1.0 sits on an edge and goes right; 4.0 is the closed upper end.
        assert_eq!(h.bucket, vec![1.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_constant_samples_widen_range() {
        let h = histogram(&[3.0; 5], 2).unwrap();
        assert_eq!(h.min, 3.0);
        assert_eq!(h.max, 3.0);
        assert_eq!(h.bucket_limit, vec![3.0, 3.5]);
        assert_eq!(h.bucket, vec![0.0, 5.0]);
    }

    #[test]
    fn test_errors() {
        match histogram(&[], 10) {
            Err(Error::EmptyHistogram) => (),
            other => panic!("expected EmptyHistogram, got {:?}", other),
        }
        match histogram(&[1.0], 0) {
            Err(Error::InvalidBins) => (),
            other => panic!("expected InvalidBins, got {:?}", other),
        }
        match histogram(&[1.0, f64::NAN], 10) {
            Err(Error::NonFiniteRange { .. }) => (),
            other => panic!("expected NonFiniteRange, got {:?}", other),
        }
        match histogram(&[f64::NEG_INFINITY, 1.0], 10) {
            Err(Error::NonFiniteRange { .. }) => (),
            other => panic!("expected NonFiniteRange, got {:?}", other),
        }
    }

    #[test]
    fn test_range_too_narrow_for_bins() {
        match histogram(&[1.0, 1.0 + 1e-15], 1000) {
            Err(Error::TooManyBins { bins: 1000 }) => (),
            other => panic!("expected TooManyBins, got {:?}", other),
        }
        // The same samples bucket fine once the edges are distinguishable.
        let h = histogram(&[1.0, 1.0 + 1e-15], 1).unwrap();
        assert_eq!(h.bucket, vec![2.0]);
        let h = histogram(&[1.0, 1.0 + 1e-9], 10).unwrap();
        assert!(h.bucket_limit.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_range_overflowing_f64() {
        match histogram(&[-1e308, 1e308], 4) {
            Err(Error::TooManyBins { bins: 4 }) => (),
            other => panic!("expected TooManyBins, got {:?}", other),
        }
    }

    #[test]
    fn test_constant_samples_beyond_half_unit_precision() {
        // Widening by 0.5 is lost at this magnitude, so every edge coincides.
        assert!(matches!(histogram(&[1e17; 3], 2), Err(Error::TooManyBins { .. })));
    }

    #[test]
    fn test_random_samples_are_all_counted() {
        let mut rng = StdRng::seed_from_u64(0x7e45);
        let dist = rand_distr::Normal::new(3.0, 10.0).unwrap();
        let values: Vec<f64> = (0..10_000).map(|_| dist.sample(&mut rng)).collect();
        let h = histogram(&values, 1000).unwrap();
        assert_eq!(h.bucket.len(), 1000);
        assert_eq!(h.bucket_limit.len(), 1000);
        assert_eq!(h.bucket.iter().sum::<f64>(), 10_000.0);
        assert_eq!(*h.bucket_limit.last().unwrap(), h.max);
        assert!(h.bucket_limit.windows(2).all(|w| w[0] < w[1]));
        let expected_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(h.min, expected_min);
        assert!(h.bucket[0] >= 1.0);
        assert!(h.bucket[999] >= 1.0);
    }
}
