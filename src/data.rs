//! Synthetic inputs for the traversal benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{BenchError, Result};

/// Lower bound of generated values used by the benchmark.
pub const DEFAULT_MIN_VALUE: u32 = 0;
/// Upper bound (inclusive) of generated values used by the benchmark.
pub const DEFAULT_MAX_VALUE: u32 = 100_000;

/// Small record traversed by the record-shaped benchmarks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Random identifier.
    pub id: u32,
    /// `name-<n>` with a freshly drawn `n`.
    pub name: String,
    /// Random age; the record predicate tests its parity.
    pub age: u32,
}

/// Random source for integer and record sequences.
pub struct DataGenerator {
    rng: ChaCha8Rng,
}

impl DataGenerator {
    /// Generator keyed from the thread RNG, so it is not reproducible.
    pub fn new() -> Self {
        let mut seed = <ChaCha8Rng as SeedableRng>::Seed::default();
        rand::thread_rng().fill(&mut seed);
        Self {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Deterministic generator; equal seeds yield equal sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws one integer uniformly from `[min, max]`.
    pub fn integer(&mut self, min: u32, max: u32) -> Result<u32> {
        check_range(min, max)?;
        Ok(self.rng.gen_range(min..=max))
    }

    /// `length` integers, each uniform over `[min, max]`. Zero length yields an empty vec.
    pub fn generate_integers(&mut self, length: usize, min: u32, max: u32) -> Result<Vec<u32>> {
        check_range(min, max)?;
        let mut values = Vec::with_capacity(length);
        for _ in 0..length {
            values.push(self.integer(min, max)?);
        }
        Ok(values)
    }

    /// `length` records whose fields are drawn independently from `[min, max]`.
    pub fn generate_records(&mut self, length: usize, min: u32, max: u32) -> Result<Vec<Record>> {
        check_range(min, max)?;
        let mut records = Vec::with_capacity(length);
        for _ in 0..length {
            let id = self.integer(min, max)?;
            let name = format!("name-{}", self.integer(min, max)?);
            let age = self.integer(min, max)?;
            records.push(Record { id, name, age });
        }
        Ok(records)
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(min: u32, max: u32) -> Result<()> {
    if min > max {
        return Err(BenchError::InvalidRange { min, max });
    }
    Ok(())
}
