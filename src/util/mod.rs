//! Random slices for testing.

use crate::error::{Result, SliceError};
use ahash::AHashMap;
use getset::Getters;
use log::*;
use rand::{seq::index, thread_rng, Rng};

/// Generates slices of random values from `may_contain`, where every value of
/// `must_contain` is present at a random position.
///
/// Values can be in `must_contain` and not in `may_contain`, but `may_contain` can't be empty.
#[derive(Getters, Debug, Clone)]
#[getset(get = "pub")]
pub struct SliceGenerator<T: Clone> {
    may_contain: Vec<T>,
    must_contain: Vec<T>,
}

impl<T: Clone> SliceGenerator<T> {
    pub fn new(may_contain: Vec<T>) -> Self {
        Self {
            may_contain,
            must_contain: Vec::new(),
        }
    }

    pub fn with_must_contain(mut self, values: Vec<T>) -> Self {
        self.must_contain = values;
        self
    }

    pub fn generate(&self, size: usize) -> Result<Vec<T>> {
        self.generate_with(size, &mut thread_rng())
    }

    pub fn generate_with<R: Rng>(&self, size: usize, rng: &mut R) -> Result<Vec<T>> {
        if self.may_contain.is_empty() {
            debug!("No values to generate slice of size {} from", size);
            return Err(SliceError::NoCandidates);
        }
        if self.must_contain.len() > size {
            debug!(
                "Can't place {} required values in slice of size {}",
                self.must_contain.len(),
                size
            );
            return Err(SliceError::index_out_of_range(
                self.must_contain.len(),
                size,
            ));
        }

        // Distinct positions for required values.
        let placed = index::sample(rng, size, self.must_contain.len())
            .into_iter()
            .zip(self.must_contain.iter())
            .collect::<AHashMap<usize, &T>>();

        let slice = (0..size)
            .map(|i| match placed.get(&i) {
                Some(&value) => value.clone(),
                None => self.may_contain[rng.gen_range(0..self.may_contain.len())].clone(),
            })
            .collect::<Vec<T>>();

        trace!(
            "Generated slice of size {} with {} required values",
            size,
            placed.len()
        );
        Ok(slice)
    }
}

/// Shorthand for [`SliceGenerator::generate`].
pub fn gen_slice<T: Clone>(size: usize, may_contain: Vec<T>, must_contain: Vec<T>) -> Result<Vec<T>> {
    SliceGenerator::new(may_contain)
        .with_must_contain(must_contain)
        .generate(size)
}
