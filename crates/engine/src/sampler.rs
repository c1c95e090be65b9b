//! Seeded randomness
//!
//! Every random draw in a run goes through one [`Sampler`], so a fixed
//! seed and fixed input reproduce the whole log byte for byte. Draw order
//! is therefore part of the output contract: changing the order in which a
//! handler samples changes every later value.

use rand::prelude::*;
use rand_distr::Distribution;

/// Deterministic random source for one generation run
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Create a sampler from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one option uniformly
    ///
    /// `options` is always a non-empty constant table in this crate.
    pub fn choose<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.rng.gen_range(0..options.len())]
    }

    /// Uniform integer in `[low, high]`
    pub fn int_in(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    /// `true` with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// One draw from a distribution
    pub fn draw<D: Distribution<f64>>(&mut self, dist: &D) -> f64 {
        dist.sample(&mut self.rng)
    }
}
