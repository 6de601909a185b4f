//! Mutator state and buffer lifecycle.

use log::trace;

use crate::rng::Rng;
use crate::strategy::Strategy;
use crate::Error;

/// Owner of one input buffer, its current logical length, and its private
/// RNG state.
///
/// The buffer has a fixed capacity of `max_input_size` bytes for the
/// mutator's whole lifetime; every strategy keeps the logical length within
/// that bound. `max_input_size` and `printable` are set at construction and
/// never change.
///
/// A `Mutator` is not shareable: parallel fuzzing means one instance (with
/// its own seed) per worker.
pub struct Mutator {
    /// Physical byte store, exactly `max_input_size` bytes. Bytes at and
    /// beyond `len` are stale, never cleared.
    pub(crate) input: Box<[u8]>,

    /// Current logical input size, always <= `max_input_size`
    pub(crate) len: usize,

    /// Maximum size inputs are allowed to reach
    pub(crate) max_input_size: usize,

    /// Restrict every written byte to ASCII printable [32, 126]
    pub(crate) printable: bool,

    /// The random number generator used for mutations
    pub(crate) rng: Rng,
}

impl Mutator {
    /// Create a new mutator
    ///
    /// `max_input_size` specifies the maximum input size that will be
    /// produced and consumed by the mutator, `seed` seeds the embedded RNG,
    /// and `printable` restricts output to ASCII printable characters.
    ///
    /// Fails only if the backing buffer cannot be allocated.
    pub fn new(max_input_size: usize, seed: u64, printable: bool) -> Result<Self, Error> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(max_input_size)
            .map_err(|source| Error::Allocation {
                requested: max_input_size,
                source,
            })?;
        buf.resize(max_input_size, 0);

        Ok(Mutator {
            input: buf.into_boxed_slice(),
            len: 0,
            max_input_size,
            printable,
            rng: Rng::new(seed),
        })
    }

    /// Install a new input to mutate
    ///
    /// Fails with [`Error::InputTooLarge`] if `data` exceeds the maximum
    /// input size; the previous contents and length are left untouched in
    /// that case.
    pub fn set_input(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() > self.max_input_size {
            return Err(Error::InputTooLarge {
                len: data.len(),
                max: self.max_input_size,
            });
        }

        self.input[..data.len()].copy_from_slice(data);
        self.len = data.len();
        Ok(())
    }

    /// Drop the current input, resetting the logical length to zero
    ///
    /// Buffer contents beyond the new length are left stale; this is not a
    /// zeroing operation.
    pub fn clear_input(&mut self) {
        self.len = 0;
    }

    /// Perform `passes` rounds of mutation, each applying one randomly
    /// selected strategy
    ///
    /// Strategies never fail; under conditions they cannot service (empty
    /// input, no remaining capacity) they degrade to no-ops and still count
    /// as a pass.
    pub fn mutate(&mut self, passes: u32) {
        for pass in 0..passes {
            let strategy = Strategy::pick(&mut self.rng);
            trace!("pass {pass}: {strategy:?} on {} byte input", self.len);
            strategy.apply(self);
            debug_assert!(self.len <= self.max_input_size);
        }
    }

    /// The current input, i.e. the `[0, len)` view of the buffer
    pub fn bytes(&self) -> &[u8] {
        &self.input[..self.len]
    }

    /// Current logical input size
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the current input is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed buffer capacity chosen at construction
    pub fn max_input_size(&self) -> usize {
        self.max_input_size
    }

    /// Whether output is restricted to ASCII printable characters
    pub fn printable(&self) -> bool {
        self.printable
    }
}
