//! Sequential random sampling without replacement.
//!
//! Draws a uniformly random sample of `n` distinct indices from an ordered
//! population of `N` records, in strictly increasing index order, without
//! materializing the population or shuffling a permutation of it. The caller
//! advances through records one at a time and the engine reports how many
//! records to skip before the next inclusion, so a full run costs O(1) extra
//! memory and O(n) or O(N) time depending on the algorithm variant.
//!
//! The skip distributions are those introduced by Jeffrey Scott Vitter:
//!
//! * Vitter JS (1984) "Faster methods for random sampling".
//!   Commun. ACM 27(7): 703--718
//! * Vitter JS (1987) "An efficient algorithm for sequential random
//!   sampling". ACM T. Math. Softw. 13(1): 58--67
//!
//! # Example
//! ```rust
//! use rand::SeedableRng;
//! use sampling::{SamplingSession, SkipAlgorithm};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut session = SamplingSession::new(SkipAlgorithm::VitterD);
//! session.init(5, 100, &mut rng).unwrap();
//! let mut cursor = 0;
//! for _ in 0..5 {
//!     let index = session.select(&mut cursor, &mut rng).unwrap();
//!     assert!(index < 100);
//! }
//! ```
#![deny(missing_docs)]

mod algorithm;
mod choose;
mod errors;
mod rng;
mod session;

pub use algorithm::SkipAlgorithm;
pub use choose::{choose, choose_bytes, choose_into};
pub use errors::{Error, Result};
pub use rng::RandomSource;
pub use session::{sample_indices, SampleIndices, SamplingSession};
