//! Vitter's Algorithm A: the O(N) sequential-rejection baseline.
//!
//! Runs in O(N) time over a full sampling run but draws only about one
//! random variate per selection. Algorithm D delegates to this method when
//! the remaining sample is a large fraction of the remaining records.

use crate::rng::RandomSource;
use crate::session::Counter;

/// Number of records to pass over before the next inclusion, drawn so that
/// every subset of the remaining records of the remaining sample size is
/// equally likely.
///
/// Stateless; works on local copies of the counters and never mutates them.
pub(super) fn skip(sample: &Counter, records: &Counter, rng: &mut impl RandomSource) -> usize {
    if sample.remaining == 1 {
        // A single inclusion, uniformly placed among what is left. Vitter
        // (1987) reaches the same distribution through TRUNC(ROUND(Nreal) *
        // UNIFORMRV()); a bounded integer draw says it directly.
        return rng.uniform_int(records.remaining);
    }

    let mut skipped = 0_usize;
    let mut top = (records.remaining - sample.remaining) as f64;
    let mut working_records = records.remaining as f64;

    // The variate comes from the open interval (0, 1): when top == 0 every
    // quotient is 0 and the current record must be selected, so v == 0 can
    // never be allowed to win the comparison.
    let v = rng.uniform_pos();
    let mut quot = top / working_records;

    while quot > v {
        skipped += 1;
        top -= 1.0;
        working_records -= 1.0;
        quot *= top / working_records;
    }

    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn counter(remaining: usize) -> Counter {
        Counter {
            total: remaining,
            remaining,
        }
    }

    #[test]
    fn test_skip_is_zero_when_sample_fills_population() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        for n in 2..20 {
            assert_eq!(skip(&counter(n), &counter(n), &mut rng), 0);
        }
    }

    #[test]
    fn test_skip_leaves_room_for_remaining_sample() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        for _ in 0..10_000 {
            let s = skip(&counter(3), &counter(10), &mut rng);
            assert!(s <= 7);
        }
    }

    #[test]
    fn test_final_selection_is_in_bounds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        for records in 1..50 {
            let s = skip(&counter(1), &counter(records), &mut rng);
            assert!(s < records);
        }
    }
}
