//! Seeded random input generation for interactive demos.
//!
//! The core accepts only fully-specified inputs, so random queues, head
//! positions and workload demands are produced here, outside of it. A fixed
//! seed reproduces the same session.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::workload::Workload;

pub struct InputGenerator {
    rng: StdRng,
}

impl InputGenerator {
    /// Creates input generator with specified random seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a queue of `length` unique cylinder requests sampled from
    /// `0..total_cylinders`.
    pub fn request_queue(&mut self, length: usize, total_cylinders: u32) -> Vec<u32> {
        rand::seq::index::sample(&mut self.rng, total_cylinders as usize, length)
            .iter()
            .map(|i| i as u32)
            .collect()
    }

    /// Generates a head position in `0..total_cylinders`.
    pub fn head_position(&mut self, total_cylinders: u32) -> u32 {
        self.rng.gen_range(0..total_cylinders)
    }

    /// Generates `count` workloads with IDs `1..=count` and demands drawn
    /// uniformly from `min_demand..=max_demand`.
    pub fn workloads(&mut self, count: u32, min_demand: u32, max_demand: u32) -> Vec<Workload> {
        (1..=count)
            .map(|id| Workload::new(id, self.rng.gen_range(min_demand..=max_demand)))
            .collect()
    }
}
