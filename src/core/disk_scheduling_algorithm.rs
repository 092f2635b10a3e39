//! Disk scheduling algorithms.

use serde::Serialize;

use crate::core::common::SimulationError;
use crate::core::config::parse_config_value;
use crate::core::disk_scheduling_algorithms::fcfs::Fcfs;
use crate::core::disk_scheduling_algorithms::sstf::Sstf;

/// Result of running a disk scheduling algorithm over a request queue: the
/// order in which requests are visited and the cumulative head movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeekPlan {
    pub order: Vec<u32>,
    pub total_seek: u64,
}

/// Trait for implementation of disk scheduling algorithms.
///
/// The algorithm is defined as a function of the request queue and the
/// initial head position, which returns the visiting order (a permutation of
/// the queue) and the total seek distance. Implementations must be
/// deterministic and must not mutate the caller's queue.
pub trait DiskSchedulingAlgorithm {
    fn schedule(&self, queue: &[u32], head: u32) -> SeekPlan;
}

/// Resolves disk scheduling algorithm by its name.
pub fn disk_scheduling_algorithm_resolver(config_str: &str) -> Box<dyn DiskSchedulingAlgorithm> {
    let (algorithm_name, options) = parse_config_value(config_str);
    match algorithm_name.as_str() {
        "FCFS" => Box::new(Fcfs::new()),
        "SSTF" => match options {
            Some(options) => Box::new(Sstf::from_str(&options)),
            None => Box::new(Sstf::new()),
        },
        _ => panic!("Can't resolve: {}", config_str),
    }
}

/// Validated entry point for disk scheduling.
///
/// Rejects any request or head position outside `0..total_cylinders` with
/// `InvalidInput` before running the algorithm.
pub fn schedule_disk(
    algorithm: &dyn DiskSchedulingAlgorithm,
    queue: &[u32],
    head: u32,
    total_cylinders: u32,
) -> Result<SeekPlan, SimulationError> {
    if head >= total_cylinders {
        return Err(SimulationError::InvalidInput(format!(
            "head position {} is out of range 0..{}",
            head, total_cylinders
        )));
    }
    for &request in queue {
        if request >= total_cylinders {
            return Err(SimulationError::InvalidInput(format!(
                "request {} is out of range 0..{}",
                request, total_cylinders
            )));
        }
    }
    Ok(algorithm.schedule(queue, head))
}
