//! Sampling session lifecycle: counters, skip/select, and the index iterator.

use crate::algorithm::{AlgorithmState, SkipAlgorithm};
use crate::errors::{Error, Result};
use crate::rng::RandomSource;

/// Progress counter for one side of a sampling run. A session carries two:
/// one for the population records and one for the sample selections.
/// `remaining == 0` means that side is exhausted.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Counter {
    pub(crate) total: usize,
    pub(crate) remaining: usize,
}

impl Counter {
    fn reset(&mut self, size: usize) {
        self.total = size;
        self.remaining = size;
    }
}

/// A reusable sequential sampling session.
///
/// Couples one [`SkipAlgorithm`] variant with the run counters and the
/// variant's private state. Construct once per algorithm choice, then
/// [`init`](SamplingSession::init) once per independent sampling run; each
/// init resets the counters and state in place.
///
/// The running cursor into the population is owned by the caller of
/// [`select`](SamplingSession::select), not by the session, so one session
/// can drive repeated independent runs over different populations.
#[derive(Clone, Debug)]
pub struct SamplingSession {
    algorithm: SkipAlgorithm,
    state: AlgorithmState,
    records: Counter,
    sample: Counter,
}

impl SamplingSession {
    /// Create a session for the given algorithm variant. The session is
    /// exhausted until the first [`init`](SamplingSession::init).
    pub fn new(algorithm: SkipAlgorithm) -> Self {
        SamplingSession {
            algorithm,
            state: AlgorithmState::new(algorithm),
            records: Counter::default(),
            sample: Counter::default(),
        }
    }

    /// The algorithm variant this session was constructed with.
    pub fn algorithm(&self) -> SkipAlgorithm {
        self.algorithm
    }

    /// Total number of records in the current run's population.
    pub fn population_size(&self) -> usize {
        self.records.total
    }

    /// Total number of selections in the current run.
    pub fn sample_size(&self) -> usize {
        self.sample.total
    }

    /// Records still eligible for selection in the current run.
    pub fn records_remaining(&self) -> usize {
        self.records.remaining
    }

    /// Selections still to be made in the current run.
    pub fn sample_remaining(&self) -> usize {
        self.sample.remaining
    }

    /// Start an independent sampling run of `sample_size` selections from a
    /// population of `population_size` records.
    ///
    /// Fails without mutating the session if the sample does not fit in the
    /// population.
    pub fn init(
        &mut self,
        sample_size: usize,
        population_size: usize,
        rng: &mut impl RandomSource,
    ) -> Result<()> {
        if sample_size > population_size {
            return Err(Error::SampleExceedsPopulation {
                sample_size,
                population_size,
            });
        }
        self.sample.reset(sample_size);
        self.records.reset(population_size);
        self.state.init(&self.sample, &self.records, rng);
        Ok(())
    }

    /// Number of records to pass over before the next inclusion.
    ///
    /// Counter bookkeeping is centralized here so the algorithm variants
    /// never touch the real counters: the skipped records and the selected
    /// one leave the population, and one selection is consumed.
    pub fn skip(&mut self, rng: &mut impl RandomSource) -> Result<usize> {
        if self.records.remaining == 0 || self.sample.remaining == 0 {
            return Err(Error::Exhausted);
        }
        let skipped = self.state.skip(&self.sample, &self.records, rng);
        self.records.remaining -= skipped + 1;
        self.sample.remaining -= 1;
        Ok(skipped)
    }

    /// Select the next record, advancing the caller-owned cursor.
    ///
    /// Returns the 0-based index of the selected record and leaves the
    /// cursor one past it, ready for the next call.
    pub fn select(
        &mut self,
        current_record: &mut usize,
        rng: &mut impl RandomSource,
    ) -> Result<usize> {
        *current_record += self.skip(rng)?;
        let selected = *current_record;
        *current_record += 1;
        Ok(selected)
    }
}

/// Iterator over the selected indices of one complete sampling run, in
/// strictly increasing order. Created by [`sample_indices`].
#[derive(Debug)]
pub struct SampleIndices<'a, R: RandomSource> {
    session: SamplingSession,
    cursor: usize,
    rng: &'a mut R,
}

/// Run one complete sampling run of `sample_size` indices drawn from
/// `[0, population_size)`, yielding the selected indices in increasing order.
pub fn sample_indices<R: RandomSource>(
    algorithm: SkipAlgorithm,
    sample_size: usize,
    population_size: usize,
    rng: &mut R,
) -> Result<SampleIndices<'_, R>> {
    let mut session = SamplingSession::new(algorithm);
    session.init(sample_size, population_size, rng)?;
    Ok(SampleIndices {
        session,
        cursor: 0,
        rng,
    })
}

impl<R: RandomSource> Iterator for SampleIndices<'_, R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.session.sample_remaining() == 0 {
            return None;
        }
        // The counters are in range by construction, so select cannot fail
        // before the run completes.
        self.session.select(&mut self.cursor, self.rng).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.session.sample_remaining();
        (remaining, Some(remaining))
    }
}

impl<R: RandomSource> ExactSizeIterator for SampleIndices<'_, R> {}
