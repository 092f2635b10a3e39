//! Live migration of a workload between hosts.

use std::fmt::{Display, Formatter};

use log::{debug, info};
use serde::Serialize;

use crate::core::common::{AllocationVerdict, SimulationError};
use crate::core::topology::Topology;

/// Status of a migration operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MigrationStatus {
    Idle,
    Draining,
    InFlight,
    Committing,
    Complete,
    Failed,
}

impl Display for MigrationStatus {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MigrationStatus::Idle => write!(f, "idle"),
            MigrationStatus::Draining => write!(f, "draining"),
            MigrationStatus::InFlight => write!(f, "in_flight"),
            MigrationStatus::Committing => write!(f, "committing"),
            MigrationStatus::Complete => write!(f, "complete"),
            MigrationStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of a migration operation.
///
/// `Failed` carries the destination's allocation verdict and means the
/// workload was returned to the source host; it is an expected outcome, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MigrationResult {
    Complete { host: String },
    Failed { reason: String },
}

/// Drives a single migration through
/// `Idle → Draining → InFlight → Committing → Complete` (or `Failed`).
///
/// The release/allocate/compensate sequence executes under one mutable
/// borrow of the topology, so no other operation can observe the workload
/// while it is held by the controller. Progress reporting is a purely
/// observational side channel and has no synchronization role.
pub struct MigrationController {
    status: MigrationStatus,
}

impl MigrationController {
    /// Creates idle migration controller.
    pub fn new() -> Self {
        Self {
            status: MigrationStatus::Idle,
        }
    }

    /// Returns the status of the last migration driven by this controller.
    pub fn status(&self) -> &MigrationStatus {
        &self.status
    }

    /// Migrates the specified workload from the source host to the
    /// destination host.
    ///
    /// Preconditions: both hosts exist, differ, and the workload is resident
    /// on the source; otherwise an error is returned and nothing changes.
    ///
    /// If the destination rejects the workload, it is re-allocated back onto
    /// the source (which is guaranteed to still have room for it) and the
    /// result is `Failed`. The workload is therefore resident somewhere at
    /// every observable point.
    ///
    /// The optional progress callback receives strictly increasing values in
    /// `0..=100`; 100 is reported only on completion.
    pub fn migrate(
        &mut self,
        topology: &mut Topology,
        workload_id: u32,
        source: &str,
        dest: &str,
        mut progress: Option<&mut dyn FnMut(u32)>,
    ) -> Result<MigrationResult, SimulationError> {
        // a rejected request must not leave the status of an earlier
        // migration observable
        self.status = MigrationStatus::Idle;
        if source == dest {
            return Err(SimulationError::InvalidInput(format!(
                "source and destination host are both {}",
                source
            )));
        }
        // verify both ends exist before touching anything
        topology.host(dest)?;
        let source_host = topology.host(source)?;
        if !source_host.is_resident(workload_id) {
            return Err(SimulationError::NotResident {
                workload_id,
                host: source.to_string(),
            });
        }

        self.status = MigrationStatus::Draining;
        if let Some(report) = progress.as_deref_mut() {
            report(0);
        }
        info!("migrating workload #{} from host {} to host {}", workload_id, source, dest);

        let workload = topology.host_mut(source)?.release(workload_id)?;
        // the workload is now owned by this controller, resident nowhere
        self.status = MigrationStatus::InFlight;
        if let Some(report) = progress.as_deref_mut() {
            report(50);
        }

        self.status = MigrationStatus::Committing;
        let verdict = topology.host_mut(dest)?.try_allocate(&workload);
        if verdict != AllocationVerdict::Success {
            // compensate: the source had room for it before the release
            let restored = topology.host_mut(source)?.try_allocate(&workload);
            assert!(
                restored == AllocationVerdict::Success,
                "host {} rejected workload #{} it just released",
                source,
                workload_id
            );
            self.status = MigrationStatus::Failed;
            debug!(
                "not enough space for workload #{} on host {}, migration failed",
                workload_id, dest
            );
            return Ok(MigrationResult::Failed {
                reason: "not enough capacity on destination host".to_string(),
            });
        }

        self.status = MigrationStatus::Complete;
        if let Some(report) = progress.as_deref_mut() {
            report(100);
        }
        info!("migration complete: workload #{} is now on host {}", workload_id, dest);
        Ok(MigrationResult::Complete { host: dest.to_string() })
    }
}

impl Default for MigrationController {
    fn default() -> Self {
        Self::new()
    }
}
