//! Uniform random draw contract consumed by the skip algorithms.

use rand::distributions::Open01;
use rand::Rng;

/// A source of uniform random draws.
///
/// The engine only ever draws open-interval reals and bounded integers. A
/// closed-at-zero real would corrupt the rejection-loop boundary condition in
/// the skip algorithms: when no candidate may be rejected, a variate of
/// exactly 0 would reject one anyway.
///
/// Every [`rand::Rng`] implements this trait, so any seedable or thread-local
/// generator from the `rand` ecosystem can drive a sampling session.
pub trait RandomSource {
    /// Draw a real uniformly from the open interval (0, 1).
    fn uniform_pos(&mut self) -> f64;

    /// Draw an integer uniformly from `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    fn uniform_int(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn uniform_pos(&mut self) -> f64 {
        self.sample(Open01)
    }

    fn uniform_int(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}
