//! Shortest-Seek-Time-First algorithm.

use crate::core::config::parse_options;
use crate::core::disk_scheduling_algorithm::{DiskSchedulingAlgorithm, SeekPlan};

/// At each step serves the pending request nearest to the current head
/// position. Equidistant requests are resolved in favor of the smaller-valued
/// one by default; the `tie_break=larger` option flips that. Either way the
/// produced order is deterministic.
#[derive(Default)]
pub struct Sstf {
    prefer_larger: bool,
}

impl Sstf {
    pub fn new() -> Self {
        Self { prefer_larger: false }
    }

    pub fn from_str(s: &str) -> Self {
        let options = parse_options(s);
        let prefer_larger = match options.get("tie_break").map(|v| v.as_str()) {
            Some("larger") => true,
            Some("smaller") | None => false,
            Some(other) => panic!("Unknown tie_break option: {}", other),
        };
        Self { prefer_larger }
    }
}

impl DiskSchedulingAlgorithm for Sstf {
    fn schedule(&self, queue: &[u32], head: u32) -> SeekPlan {
        // works on a private copy, the caller's queue is left intact
        let mut remaining = queue.to_vec();
        let mut order = Vec::with_capacity(queue.len());
        let mut total_seek: u64 = 0;
        let mut pos = head;
        while !remaining.is_empty() {
            let (idx, &nearest) = remaining
                .iter()
                .enumerate()
                .min_by(|(_, &a), (_, &b)| {
                    pos.abs_diff(a).cmp(&pos.abs_diff(b)).then_with(|| {
                        if self.prefer_larger {
                            b.cmp(&a)
                        } else {
                            a.cmp(&b)
                        }
                    })
                })
                .unwrap();
            total_seek += pos.abs_diff(nearest) as u64;
            pos = nearest;
            order.push(nearest);
            remaining.swap_remove(idx);
        }
        SeekPlan { order, total_seek }
    }
}
