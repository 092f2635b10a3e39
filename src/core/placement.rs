//! Placement engine assigning a workload batch to the topology.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;

use crate::core::common::{AllocationVerdict, SimulationError};
use crate::core::placement_algorithm::PlacementAlgorithm;
use crate::core::topology::Topology;
use crate::core::workload::Workload;

/// Per-workload placement outcome.
///
/// `Unplaced` is a normal result of capacity exhaustion, not an error, and is
/// always reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlacementResult {
    Placed { host: String },
    Unplaced,
}

/// Places each workload in input order onto the host selected by the
/// algorithm, mutating the topology. Returns per-workload results keyed by
/// workload ID, in input order.
///
/// Fails with `InvalidInput` on zero demand or on a duplicate workload ID
/// (within the batch or against workloads already resident in the topology);
/// in that case the topology is left untouched.
///
/// Given the same topology and workload order the output is fully
/// deterministic; randomness, if any, belongs to input generation.
pub fn place_workloads(
    topology: &mut Topology,
    workloads: &[Workload],
    algorithm: &dyn PlacementAlgorithm,
) -> Result<IndexMap<u32, PlacementResult>, SimulationError> {
    let mut seen = HashSet::new();
    for workload in workloads {
        if workload.demand == 0 {
            return Err(SimulationError::InvalidInput(format!(
                "workload #{} has zero demand",
                workload.id
            )));
        }
        if !seen.insert(workload.id) || topology.find_resident(workload.id).is_some() {
            return Err(SimulationError::InvalidInput(format!(
                "duplicate workload id #{}",
                workload.id
            )));
        }
    }

    let mut results = IndexMap::new();
    for workload in workloads {
        match algorithm.select_host(workload, topology) {
            Some(host_name) => {
                let verdict = topology.host_mut(&host_name)?.try_allocate(workload);
                // the algorithm reported a fit just above, on an unchanged topology
                assert!(
                    verdict == AllocationVerdict::Success,
                    "host {} rejected workload #{} selected for it",
                    host_name,
                    workload.id
                );
                results.insert(workload.id, PlacementResult::Placed { host: host_name });
            }
            None => {
                debug!("no suitable host for workload #{}", workload.id);
                results.insert(workload.id, PlacementResult::Unplaced);
            }
        }
    }
    let placed = results
        .values()
        .filter(|r| matches!(r, PlacementResult::Placed { .. }))
        .count();
    info!("placed {} of {} workloads", placed, workloads.len());
    Ok(results)
}
