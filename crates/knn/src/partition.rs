//! Contiguous partitioning of a training set across workers.

use std::ops::Range;

/// Returns the number of partitions actually used for `n` points and
/// `workers` requested workers: `workers` clamped to `1..=max(1, n)`.
///
/// Clamping guarantees that no partition is empty when `n > 0`.
pub fn effective_workers(n: usize, workers: usize) -> usize {
    workers.clamp(1, n.max(1))
}

/// Splits `0..n` into `effective_workers(n, workers)` contiguous ranges.
///
/// Every range but the last has `n / w` points; the last absorbs the
/// remainder. Together the ranges cover `0..n` exactly once, in order.
///
/// # Example
///
/// ```
/// use kvote_knn::partition_ranges;
///
/// assert_eq!(partition_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// // More workers than points collapses to one point per partition.
/// assert_eq!(partition_ranges(2, 8), vec![0..1, 1..2]);
/// ```
pub fn partition_ranges(n: usize, workers: usize) -> Vec<Range<usize>> {
    let w = effective_workers(n, workers);
    let chunk = n / w;
    (0..w)
        .map(|i| {
            let start = i * chunk;
            let end = if i == w - 1 { n } else { start + chunk };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(ranges: &[Range<usize>], n: usize) {
        let mut next = 0;
        for r in ranges {
            assert_eq!(r.start, next, "gap or overlap at {next} in {ranges:?}");
            assert!(r.start <= r.end);
            next = r.end;
        }
        assert_eq!(next, n, "ranges {ranges:?} do not end at {n}");
    }

    #[test]
    fn test_even_split() {
        assert_eq!(partition_ranges(8, 4), vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_last_partition_absorbs_remainder() {
        let ranges = partition_ranges(11, 4);
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..11]);
    }

    #[test]
    fn test_single_worker() {
        assert_eq!(partition_ranges(7, 1), vec![0..7]);
    }

    #[test]
    fn test_workers_equal_n() {
        assert_eq!(partition_ranges(3, 3), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_workers_exceed_n_clamped() {
        let ranges = partition_ranges(3, 10);
        assert_eq!(ranges.len(), 3);
        assert!(ranges.iter().all(|r| !r.is_empty()));
        assert_exact_cover(&ranges, 3);
    }

    #[test]
    fn test_empty_input_single_empty_partition() {
        assert_eq!(partition_ranges(0, 4), vec![0..0]);
        assert_eq!(effective_workers(0, 4), 1);
    }

    #[test]
    fn test_zero_workers_clamped_to_one() {
        // Validation of workers happens at the scanner; the helper never divides by zero.
        assert_eq!(effective_workers(5, 0), 1);
        assert_eq!(partition_ranges(5, 0), vec![0..5]);
    }

    #[test]
    fn test_exact_cover_all_sizes() {
        for n in 0..=64 {
            for workers in 1..=n + 2 {
                let ranges = partition_ranges(n, workers);
                assert_eq!(ranges.len(), effective_workers(n, workers));
                assert_exact_cover(&ranges, n);
                if n > 0 {
                    assert!(
                        ranges.iter().all(|r| !r.is_empty()),
                        "empty partition for n={n}, workers={workers}: {ranges:?}"
                    );
                }
            }
        }
    }
}
