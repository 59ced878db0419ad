//! Batch selection: copy a uniformly chosen subset out of a slice, in order.

use crate::algorithm::SkipAlgorithm;
use crate::errors::{Error, Result};
use crate::rng::RandomSource;
use crate::session::{sample_indices, SamplingSession};

/// Fill `dest` with a uniformly chosen `dest.len()`-element subset of `src`,
/// preserving the relative order of the elements in `src`.
///
/// Fails with [`Error::SampleExceedsPopulation`], leaving `dest` untouched,
/// if `dest` is longer than `src`. On success every `dest.len()`-element
/// subset of `src` is equally likely, and each element lands in `dest` with
/// marginal probability `dest.len() / src.len()`.
pub fn choose_into<T: Copy>(
    algorithm: SkipAlgorithm,
    dest: &mut [T],
    src: &[T],
    rng: &mut impl RandomSource,
) -> Result<()> {
    let mut session = SamplingSession::new(algorithm);
    session.init(dest.len(), src.len(), rng)?;
    let mut current_record = 0;
    for slot in dest {
        *slot = src[session.select(&mut current_record, rng)?];
    }
    Ok(())
}

/// Return a uniformly chosen `sample_size`-element subset of `src` as a new
/// vector, preserving the relative order of the elements in `src`.
pub fn choose<T: Copy>(
    algorithm: SkipAlgorithm,
    src: &[T],
    sample_size: usize,
    rng: &mut impl RandomSource,
) -> Result<Vec<T>> {
    let indices = sample_indices(algorithm, sample_size, src.len(), rng)?;
    Ok(indices.map(|index| src[index]).collect())
}

/// Untyped-buffer variant of [`choose_into`] for interop with records that
/// only exist as raw bytes.
///
/// Both buffers are interpreted as packed arrays of `element_size`-byte
/// elements; `dest` receives `dest.len() / element_size` of the
/// `src.len() / element_size` source elements, byte for byte, in source
/// order. Fails with [`Error::MisalignedBuffer`] if `element_size` is zero
/// or either buffer is not a whole number of elements, and with
/// [`Error::SampleExceedsPopulation`] if `dest` holds more elements than
/// `src`; `dest` is untouched on every error path.
pub fn choose_bytes(
    algorithm: SkipAlgorithm,
    dest: &mut [u8],
    src: &[u8],
    element_size: usize,
    rng: &mut impl RandomSource,
) -> Result<()> {
    let sample_size = element_count(dest.len(), element_size)?;
    let population_size = element_count(src.len(), element_size)?;

    let mut session = SamplingSession::new(algorithm);
    session.init(sample_size, population_size, rng)?;
    let mut current_record = 0;
    for slot in dest.chunks_exact_mut(element_size) {
        let selected = session.select(&mut current_record, rng)?;
        slot.copy_from_slice(&src[selected * element_size..(selected + 1) * element_size]);
    }
    Ok(())
}

fn element_count(len: usize, element_size: usize) -> Result<usize> {
    if element_size == 0 || len % element_size != 0 {
        return Err(Error::MisalignedBuffer { len, element_size });
    }
    Ok(len / element_size)
}
