//! Workload placement algorithms.

use crate::core::config::parse_config_value;
use crate::core::placement_algorithms::first_fit::FirstFit;
use crate::core::topology::Topology;
use crate::core::workload::Workload;

/// Trait for implementation of workload placement algorithms.
///
/// The algorithm is defined as a function of a workload and the current
/// topology state, which returns the name of the host selected for placement
/// or `None` if no host can accept the workload. The algorithm itself never
/// mutates the topology.
pub trait PlacementAlgorithm {
    fn select_host(&self, workload: &Workload, topology: &Topology) -> Option<String>;
}

/// Resolves placement algorithm by its name.
pub fn placement_algorithm_resolver(config_str: &str) -> Box<dyn PlacementAlgorithm> {
    let (algorithm_name, _options) = parse_config_value(config_str);
    match algorithm_name.as_str() {
        "FirstFit" => Box::new(FirstFit::new()),
        _ => panic!("Can't resolve: {}", config_str),
    }
}
