//! Errors reported by sampling sessions and batch selection.

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by sampling sessions and batch selection.
///
/// Nothing is retried internally; every error is returned to the immediate
/// caller. The rejection loops inside the skip algorithms are part of the
/// sampling method itself, not error recovery.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested sample is larger than the population it is drawn from.
    #[error(
        "cannot sample {sample_size} records from a population of {population_size}; \
         the sample size must not exceed the population size"
    )]
    SampleExceedsPopulation {
        /// Number of records requested.
        sample_size: usize,
        /// Number of records available.
        population_size: usize,
    },

    /// A raw byte buffer does not hold a whole number of elements.
    #[error("buffer of {len} bytes does not hold a whole number of {element_size}-byte elements")]
    MisalignedBuffer {
        /// Length of the offending buffer in bytes.
        len: usize,
        /// Element size the buffer was interpreted with.
        element_size: usize,
    },

    /// A skip or select call was made after the sampling run completed.
    #[error("sampling run is exhausted; initialize the session before selecting again")]
    Exhausted,
}
