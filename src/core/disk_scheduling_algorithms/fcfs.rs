//! First-Come-First-Served algorithm.

use crate::core::disk_scheduling_algorithm::{DiskSchedulingAlgorithm, SeekPlan};

/// Serves requests in the order they arrived.
#[derive(Default)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl DiskSchedulingAlgorithm for Fcfs {
    fn schedule(&self, queue: &[u32], head: u32) -> SeekPlan {
        let mut total_seek: u64 = 0;
        let mut pos = head;
        for &request in queue {
            total_seek += pos.abs_diff(request) as u64;
            pos = request;
        }
        SeekPlan {
            order: queue.to_vec(),
            total_seek,
        }
    }
}
