//! Capacity host state.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::core::common::{AllocationVerdict, SimulationError};
use crate::core::workload::Workload;

/// Read-only utilization snapshot of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostUtilization {
    pub used: u32,
    pub capacity: u32,
    pub resident_count: usize,
}

/// Stores host properties (fixed capacity) and state (used amount, resident
/// workloads in allocation order).
///
/// The host maintains the accounting invariant
/// `used == sum of resident demands <= capacity` after every mutation.
#[derive(Debug, Clone)]
pub struct Host {
    pub name: String,
    capacity: u32,
    used: u32,
    residents: IndexMap<u32, Workload>,
}

impl Host {
    /// Creates empty host with specified name and total capacity.
    pub fn new(name: &str, capacity: u32) -> Self {
        Self {
            name: name.to_string(),
            capacity,
            used: 0,
            residents: IndexMap::new(),
        }
    }

    /// Checks if the specified workload currently fits on this host.
    /// Workload demand must be positive.
    pub fn can_allocate(&self, workload: &Workload) -> AllocationVerdict {
        assert!(workload.demand > 0, "workload #{} has zero demand", workload.id);
        // used <= capacity holds, so the subtraction cannot underflow
        if workload.demand > self.capacity - self.used {
            return AllocationVerdict::NotEnoughCapacity;
        }
        AllocationVerdict::Success
    }

    /// Tries to place the workload on this host.
    ///
    /// On success the workload is appended to the resident sequence and
    /// `used` grows by its demand. On rejection the host state is unchanged.
    pub fn try_allocate(&mut self, workload: &Workload) -> AllocationVerdict {
        let verdict = self.can_allocate(workload);
        if verdict != AllocationVerdict::Success {
            debug!("not enough space for workload #{} on host {}", workload.id, self.name);
            return verdict;
        }
        self.used += workload.demand;
        self.residents.insert(workload.id, *workload);
        debug!("workload #{} allocated on host {}", workload.id, self.name);
        self.check_invariant();
        AllocationVerdict::Success
    }

    /// Removes the specified workload from this host and returns it.
    ///
    /// Fails with `NotResident` if the workload is not on this host, leaving
    /// the state unchanged.
    pub fn release(&mut self, workload_id: u32) -> Result<Workload, SimulationError> {
        let workload = self
            .residents
            .shift_remove(&workload_id)
            .ok_or(SimulationError::NotResident {
                workload_id,
                host: self.name.clone(),
            })?;
        self.used -= workload.demand;
        debug!("workload #{} released from host {}", workload_id, self.name);
        self.check_invariant();
        Ok(workload)
    }

    /// Returns the current utilization snapshot without side effects.
    pub fn utilization(&self) -> HostUtilization {
        HostUtilization {
            used: self.used,
            capacity: self.capacity,
            resident_count: self.residents.len(),
        }
    }

    /// Returns the total capacity of this host.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the currently used amount of this host.
    pub fn used(&self) -> u32 {
        self.used
    }

    /// Returns true if the specified workload is resident on this host.
    pub fn is_resident(&self, workload_id: u32) -> bool {
        self.residents.contains_key(&workload_id)
    }

    /// Returns resident workloads in allocation order.
    pub fn residents(&self) -> Vec<&Workload> {
        self.residents.values().collect()
    }

    // Accounting mismatch here means a bug in the core, not a recoverable
    // condition, so it aborts instead of returning an error.
    fn check_invariant(&self) {
        let total: u32 = self.residents.values().map(|w| w.demand).sum();
        assert!(
            self.used == total && self.used <= self.capacity,
            "host {}: accounting mismatch (used = {}, sum of residents = {}, capacity = {})",
            self.name,
            self.used,
            total,
            self.capacity
        );
    }
}
