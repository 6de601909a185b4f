//! Deterministic, seedable byte-level mutation engine for fuzz testing.
//!
//! Given a corpus input and a maximum size, a [`Mutator`] applies randomized
//! bounds-safe transformations (bit flips, arithmetic deltas, block
//! insert/delete/copy/swap, magic value injection, random overwrite/insert)
//! and produces a new candidate input that never exceeds the configured
//! maximum. There is no coverage feedback, corpus persistence, or scheduling
//! here; this is the per-input transformation primitive a larger fuzzer
//! calls repeatedly.
//!
//! Output is bit-for-bit reproducible from the seed: two mutators built with
//! the same `(max_input_size, seed, printable)` and fed the same sequence of
//! calls produce identical buffers at every step. For parallel fuzzing, run
//! one mutator (with its own seed) per worker; a single instance is not
//! shareable.
//!
//! ```
//! use mangler::Mutator;
//!
//! let mut mutator = Mutator::new(128, 0xd7ebfe9b8e89fa50, true).unwrap();
//!
//! for _ in 0..32 {
//!     mutator.set_input(b"APPLES ARE DELICIOUS").unwrap();
//!
//!     // Corrupt it with 4 mutation passes
//!     mutator.mutate(4);
//!
//!     println!("{:?}", String::from_utf8_lossy(mutator.bytes()));
//!     mutator.clear_input();
//! }
//! ```

pub mod magic_values;
mod mutator;
mod rng;
mod strategy;

use std::collections::TryReserveError;

use thiserror::Error;

pub use mutator::Mutator;
pub use rng::Rng;
pub use strategy::Strategy;

/// Errors reported by the mutator lifecycle
///
/// Mutation strategies themselves never error; they degrade to no-ops under
/// conditions they cannot service.
#[derive(Debug, Error)]
pub enum Error {
    /// The input buffer could not be allocated at construction
    #[error("failed to allocate {requested} byte input buffer")]
    Allocation {
        /// Requested buffer capacity in bytes
        requested: usize,
        /// Underlying allocator failure
        #[source]
        source: TryReserveError,
    },

    /// The caller supplied more bytes than the configured maximum input size
    #[error("input of {len} bytes exceeds the maximum input size of {max}")]
    InputTooLarge {
        /// Length of the rejected input
        len: usize,
        /// The mutator's maximum input size
        max: usize,
    },
}
