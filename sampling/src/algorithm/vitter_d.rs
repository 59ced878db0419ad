//! Vitter's Algorithm D: ~O(n) acceptance-rejection skip generation.
//!
//! Draws roughly one random variate per selection instead of scanning the
//! whole population, at the cost of a handful of extra floating-point
//! operations per skip. Follows the more efficient formulation of Vitter
//! (1987); fractional powers are computed as exp(ln(u) / m) so intermediate
//! values stay in range in double precision.

use log::debug;

use super::vitter_a;
use crate::rng::RandomSource;
use crate::session::Counter;

/// Algorithm A takes over once the remaining sample exceeds 1/13 of the
/// remaining records. Vitter (1987) recommends alpha in 0.05--0.15 and uses
/// alpha = 1/13.
const ALPHA_INVERSE: usize = 13;

/// Cached state for one sampling run.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct State {
    /// Cached variate, distributed as U^(1/sample.remaining) for the
    /// remaining sample size it was drawn against.
    vprime: f64,
    /// Once set, the rest of the run is served by Algorithm A.
    use_vitter_a: bool,
}

/// U^(1/m) for U uniform in (0, 1), via exp/ln for numerical stability.
fn draw_vprime(rng: &mut impl RandomSource, m: usize) -> f64 {
    (rng.uniform_pos().ln() / m as f64).exp()
}

fn vitter_a_is_faster(sample: &Counter, records: &Counter) -> bool {
    ALPHA_INVERSE * sample.remaining > records.remaining
}

/// Reset the cached state for a fresh run.
///
/// Checking the threshold up front saves one wasted variate when the whole
/// run is going to be served by Algorithm A anyway.
pub(super) fn init(
    state: &mut State,
    sample: &Counter,
    records: &Counter,
    rng: &mut impl RandomSource,
) {
    if sample.remaining == 0 || vitter_a_is_faster(sample, records) {
        *state = State {
            vprime: 0.0,
            use_vitter_a: true,
        };
    } else {
        *state = State {
            vprime: draw_vprime(rng, sample.remaining),
            use_vitter_a: false,
        };
    }
}

/// Number of records to pass over before the next inclusion.
pub(super) fn skip(
    state: &mut State,
    sample: &Counter,
    records: &Counter,
    rng: &mut impl RandomSource,
) -> usize {
    // The sample/record ratio drifts as the run proceeds; once Algorithm A
    // becomes the cheaper method the hand-off is permanent for this run.
    if !state.use_vitter_a && vitter_a_is_faster(sample, records) {
        debug!(
            "switching to vitter_a with {} of {} records remaining",
            sample.remaining, records.remaining
        );
        state.use_vitter_a = true;
    }
    if state.use_vitter_a {
        return vitter_a::skip(sample, records, rng);
    }

    let n = sample.remaining;
    let n_real = n as f64;
    let records_real = records.remaining as f64;

    if n == 1 {
        // The cached variate already encodes the final pick. f64 rounding
        // can push the product up to exactly records.remaining; the selected
        // index must stay inside the population.
        return ((records_real * state.vprime) as usize).min(records.remaining - 1);
    }

    let nmin1_inv = 1.0 / (n_real - 1.0);
    let qu1 = 1 + records.remaining - n;
    let qu1_real = qu1 as f64;

    loop {
        // Step D2: candidate skip from the cached variate; redraw until the
        // candidate leaves room for the rest of the sample.
        let (x, candidate) = loop {
            let x = records_real * (1.0 - state.vprime);
            let candidate = x as usize;
            if candidate < qu1 {
                break (x, candidate);
            }
            state.vprime = draw_vprime(rng, n);
        };

        let y1 = ((rng.uniform_pos() * records_real / qu1_real).ln() * nmin1_inv).exp();
        state.vprime = y1 * (1.0 - x / records_real) * qu1_real / (qu1_real - candidate as f64);

        // Step D3: cheap acceptance test.
        if state.vprime <= 1.0 {
            state.vprime = draw_vprime(rng, n - 1);
            return candidate;
        }

        // Step D4: exact acceptance test via the correction product y2. The
        // product bounds depend on which of the remaining sample and the
        // candidate skip is larger (Vitter 1987, step D4).
        let mut y2 = 1.0;
        let mut top = records_real - 1.0;
        let (mut bottom, limit) = if n - 1 > candidate {
            (records_real - n_real, records.remaining - candidate)
        } else {
            (records_real - candidate as f64 - 1.0, qu1)
        };
        for _ in limit..records.remaining {
            y2 *= top / bottom;
            top -= 1.0;
            bottom -= 1.0;
        }

        if records_real / (records_real - x) >= y1 * (y2.ln() * nmin1_inv).exp() {
            // Accept; cache a variate for the next, smaller sample size.
            state.vprime = draw_vprime(rng, n - 1);
            return candidate;
        }

        // Reject; redraw against the current sample size and retry.
        state.vprime = draw_vprime(rng, n);
    }
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
    fn test_init_delegates_dense_samples() {
        // 13 * 5 > 10: the whole run belongs to Algorithm A and no variate
        // is drawn at init.
        let mut state = State::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let mut untouched = rng.clone();
        init(&mut state, &counter(5), &counter(10), &mut rng);
        assert!(state.use_vitter_a);
        assert_eq!(rng.uniform_pos(), untouched.uniform_pos());
    }

    #[test]
    fn test_init_caches_variate_for_sparse_samples() {
        let mut state = State::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        init(&mut state, &counter(3), &counter(100), &mut rng);
        assert!(!state.use_vitter_a);
        assert!(state.vprime > 0.0 && state.vprime < 1.0);
    }

    #[test]
    fn test_init_with_empty_sample_draws_nothing() {
        let mut state = State::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let mut untouched = rng.clone();
        init(&mut state, &counter(0), &counter(100), &mut rng);
        assert!(state.use_vitter_a);
        assert_eq!(rng.uniform_pos(), untouched.uniform_pos());
    }

    #[test]
    fn test_skip_leaves_room_for_remaining_sample() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        for _ in 0..10_000 {
            let mut state = State::default();
            let sample = counter(3);
            let records = counter(100);
            init(&mut state, &sample, &records, &mut rng);
            let s = skip(&mut state, &sample, &records, &mut rng);
            // s < qu1 = records - sample + 1
            assert!(s <= 97);
        }
    }

    #[test]
    fn test_final_selection_uses_cached_variate() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(4);
        for _ in 0..10_000 {
            let mut state = State::default();
            let sample = counter(1);
            let records = counter(50);
            init(&mut state, &sample, &records, &mut rng);
            let s = skip(&mut state, &sample, &records, &mut rng);
            assert!(s < 50);
        }
    }
}
