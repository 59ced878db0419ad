//! Skip-generating algorithm variants and their per-run state.
//!
//! The variant set is closed: sequential sampling has a small, fixed family
//! of published skip distributions, and exhaustive matching lets the compiler
//! check that every variant handles every operation. Nair's Algorithm E
//! (Nair 1990) refines Algorithm D further and is the known candidate for a
//! future variant, but it has never been implemented here and `"nair_e"` is
//! not a recognized registry name.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::rng::RandomSource;
use crate::session::Counter;

mod vitter_a;
mod vitter_d;

/// Strategy for generating the number of records to skip before the next
/// inclusion.
///
/// Variants can be looked up by their registry names `"vitter_a"` and
/// `"vitter_d"` via [`FromStr`](std::str::FromStr).
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
    Serialize,
)]
pub enum SkipAlgorithm {
    /// Vitter's Algorithm A: O(N) sequential rejection, one random draw per
    /// skip in the common case. The reference baseline.
    #[serde(rename = "vitter_a")]
    #[strum(serialize = "vitter_a")]
    VitterA,

    /// Vitter's Algorithm D: ~O(n) acceptance-rejection with a cached
    /// variate, falling back to Algorithm A when the sample makes up a large
    /// fraction of the remaining records.
    #[serde(rename = "vitter_d")]
    #[strum(serialize = "vitter_d")]
    VitterD,
}

impl SkipAlgorithm {
    /// Registry name of this variant.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Private per-run state, selected once at session construction to match the
/// chosen variant.
#[derive(Clone, Debug)]
pub(crate) enum AlgorithmState {
    VitterA,
    VitterD(vitter_d::State),
}

impl AlgorithmState {
    pub(crate) fn new(algorithm: SkipAlgorithm) -> Self {
        match algorithm {
            SkipAlgorithm::VitterA => AlgorithmState::VitterA,
            SkipAlgorithm::VitterD => AlgorithmState::VitterD(vitter_d::State::default()),
        }
    }

    /// Reset the state in place for a fresh run over the given counters.
    pub(crate) fn init(
        &mut self,
        sample: &Counter,
        records: &Counter,
        rng: &mut impl RandomSource,
    ) {
        match self {
            // Algorithm A requires no initialization.
            AlgorithmState::VitterA => (),
            AlgorithmState::VitterD(state) => vitter_d::init(state, sample, records, rng),
        }
    }

    /// Number of records to pass over before the next inclusion.
    ///
    /// Counter bookkeeping is owned by the session; no variant mutates the
    /// real counters.
    pub(crate) fn skip(
        &mut self,
        sample: &Counter,
        records: &Counter,
        rng: &mut impl RandomSource,
    ) -> usize {
        match self {
            AlgorithmState::VitterA => vitter_a::skip(sample, records, rng),
            AlgorithmState::VitterD(state) => vitter_d::skip(state, sample, records, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert_eq!("vitter_a".parse(), Ok(SkipAlgorithm::VitterA));
        assert_eq!("vitter_d".parse(), Ok(SkipAlgorithm::VitterD));
    }

    #[test]
    fn test_registry_names_round_trip() {
        for algorithm in [SkipAlgorithm::VitterA, SkipAlgorithm::VitterD] {
            assert_eq!(algorithm.name().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert!("nair_e".parse::<SkipAlgorithm>().is_err());
        assert!("".parse::<SkipAlgorithm>().is_err());
        assert!("VitterA".parse::<SkipAlgorithm>().is_err());
    }
}
