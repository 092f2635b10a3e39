//! Simulation session facade.

use std::rc::Rc;

use indexmap::IndexMap;
use sugars::rc;

use crate::core::common::SimulationError;
use crate::core::config::SimulationConfig;
use crate::core::disk_scheduling_algorithm::{
    disk_scheduling_algorithm_resolver, schedule_disk, SeekPlan,
};
use crate::core::host::Host;
use crate::core::logger::{Logger, StdoutLogger};
use crate::core::migration::{MigrationController, MigrationResult, MigrationStatus};
use crate::core::placement::{place_workloads, PlacementResult};
use crate::core::placement_algorithm::PlacementAlgorithm;
use crate::core::placement_algorithms::first_fit::FirstFit;
use crate::core::topology::Topology;
use crate::core::workload::Workload;

/// Owns the topology of a single simulation session and exposes the core
/// operations to the presentation layer.
///
/// Each session must own its own instance; topologies are never shared
/// between sessions, and operations within a session run one at a time.
pub struct ClusterSimulation {
    topology: Topology,
    placement_algorithm: Box<dyn PlacementAlgorithm>,
    migration: MigrationController,
    logger: Box<dyn Logger>,
    sim_config: Rc<SimulationConfig>,
}

impl ClusterSimulation {
    /// Creates simulation session with topology built from the config.
    pub fn new(sim_config: SimulationConfig) -> Result<Self, SimulationError> {
        let topology = Topology::from_config(&sim_config)?;
        Ok(Self {
            topology,
            placement_algorithm: Box::new(FirstFit::new()),
            migration: MigrationController::new(),
            logger: Box::new(StdoutLogger::new()),
            sim_config: rc!(sim_config),
        })
    }

    /// Replaces the default stdout logger.
    pub fn with_logger(mut self, logger: Box<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replaces the default first-fit placement algorithm.
    pub fn with_placement_algorithm(mut self, algorithm: Box<dyn PlacementAlgorithm>) -> Self {
        self.placement_algorithm = algorithm;
        self
    }

    /// Adds an empty site to the topology.
    pub fn add_site(&mut self, name: &str) -> Result<(), SimulationError> {
        self.topology.add_site(name)
    }

    /// Adds a host with default capacity to the specified site.
    pub fn add_host(&mut self, site: &str, name: &str) -> Result<(), SimulationError> {
        self.add_host_with_capacity(site, name, self.sim_config.host_capacity)
    }

    /// Adds a host with the given capacity to the specified site.
    pub fn add_host_with_capacity(
        &mut self,
        site: &str,
        name: &str,
        capacity: u32,
    ) -> Result<(), SimulationError> {
        self.topology.add_host(site, name, capacity)?;
        self.logger
            .log_info("topology", format!("added host {} to site {}", name, site));
        Ok(())
    }

    /// Computes the seek order and total seek distance for the request queue
    /// using the named algorithm ("FCFS" or "SSTF").
    pub fn schedule_disk(
        &mut self,
        algorithm_name: &str,
        queue: &[u32],
        head: u32,
    ) -> Result<SeekPlan, SimulationError> {
        let algorithm = disk_scheduling_algorithm_resolver(algorithm_name);
        let plan = schedule_disk(algorithm.as_ref(), queue, head, self.sim_config.total_cylinders)?;
        self.logger.log_info(
            "disk",
            format!(
                "{}: visited {} requests from head {}, total seek {}",
                algorithm_name,
                plan.order.len(),
                head,
                plan.total_seek
            ),
        );
        Ok(plan)
    }

    /// Places the workloads onto the topology and reports a result for each
    /// of them, in input order.
    pub fn place_workloads(
        &mut self,
        workloads: &[Workload],
    ) -> Result<IndexMap<u32, PlacementResult>, SimulationError> {
        let results = place_workloads(&mut self.topology, workloads, self.placement_algorithm.as_ref())?;
        for (workload_id, result) in &results {
            match result {
                PlacementResult::Placed { host } => self
                    .logger
                    .log_info("placement", format!("workload #{} placed on host {}", workload_id, host)),
                PlacementResult::Unplaced => self
                    .logger
                    .log_warn("placement", format!("workload #{} left unplaced", workload_id)),
            }
        }
        Ok(results)
    }

    /// Migrates the workload from the source host to the destination host.
    pub fn migrate(
        &mut self,
        workload_id: u32,
        source: &str,
        dest: &str,
    ) -> Result<MigrationResult, SimulationError> {
        self.migrate_with_progress(workload_id, source, dest, |_| {})
    }

    /// Same as [`migrate`](Self::migrate), with a progress callback invoked
    /// with increasing values in `0..=100`. The callback is cosmetic pacing
    /// for the presentation layer and does not affect the outcome.
    pub fn migrate_with_progress(
        &mut self,
        workload_id: u32,
        source: &str,
        dest: &str,
        mut progress: impl FnMut(u32),
    ) -> Result<MigrationResult, SimulationError> {
        let result =
            self.migration
                .migrate(&mut self.topology, workload_id, source, dest, Some(&mut progress))?;
        match &result {
            MigrationResult::Complete { host } => self.logger.log_info(
                "migration",
                format!("workload #{} migrated from host {} to host {}", workload_id, source, host),
            ),
            MigrationResult::Failed { reason } => self.logger.log_warn(
                "migration",
                format!(
                    "migration of workload #{} from host {} to host {} failed: {}",
                    workload_id, source, dest, reason
                ),
            ),
        }
        Ok(result)
    }

    /// Returns the status of the last migration.
    pub fn migration_status(&self) -> &MigrationStatus {
        self.migration.status()
    }

    /// Returns the host with the specified name.
    pub fn host(&self, name: &str) -> Result<&Host, SimulationError> {
        self.topology.host(name)
    }

    /// Returns the session topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the simulation config.
    pub fn sim_config(&self) -> &SimulationConfig {
        &self.sim_config
    }

    /// Saves the collected log if the logger keeps one.
    pub fn save_log(&self, path: &str) -> Result<(), std::io::Error> {
        self.logger.save_log(path)
    }
}
