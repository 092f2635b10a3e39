//! First Fit algorithm.

use crate::core::common::AllocationVerdict;
use crate::core::placement_algorithm::PlacementAlgorithm;
use crate::core::topology::Topology;
use crate::core::workload::Workload;

/// Uses the first suitable host, scanning sites in topology order and hosts
/// within a site in topology order.
///
/// This is greedy first fit, not optimal bin packing: fragmentation may
/// leave a later larger workload unplaced even when a different assignment
/// would have fit it. That is expected and acceptable here.
#[derive(Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Self {}
    }
}

impl PlacementAlgorithm for FirstFit {
    fn select_host(&self, workload: &Workload, topology: &Topology) -> Option<String> {
        topology
            .host_names()
            .into_iter()
            .find(|name| {
                topology
                    .host(name)
                    .map(|host| host.can_allocate(workload) == AllocationVerdict::Success)
                    .unwrap_or(false)
            })
            .map(|name| name.to_string())
    }
}
