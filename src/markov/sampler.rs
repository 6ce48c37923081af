//! Weighted sampling over an injectable random source

use indexmap::IndexMap;
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::Hash;

/// Source of uniform integers. Production wraps a `rand` RNG; tests can
/// script exact draws.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u64) -> u64;
}

/// Adapter from any `rand` RNG
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.0.random_range(0..bound)
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Seeded ChaCha when a seed is given, the thread RNG otherwise.
pub fn source_for(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    }
}

/// Draw one key with probability proportional to its count.
///
/// Walks the cumulative counts in map order, so a given draw always maps
/// to the same key. Returns `None` when every count is zero.
pub fn sample_weighted<'a, K, S>(dist: &'a IndexMap<K, u64>, source: &mut S) -> Option<&'a K>
where
    K: Hash + Eq,
    S: RandomSource + ?Sized,
{
    let total: u64 = dist.values().sum();
    if total == 0 {
        return None;
    }
    let mut r = source.next_below(total);
    for (key, &weight) in dist {
        if r < weight {
            return Some(key);
        }
        r -= weight;
    }
    None
}

/// Replays a fixed list of draws (each taken modulo the bound).
#[cfg(test)]
pub(crate) struct ScriptedSource {
    draws: std::collections::VecDeque<u64>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(draws: &[u64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u64) -> u64 {
        self.draws.pop_front().expect("script exhausted") % bound
    }
}
