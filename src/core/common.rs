//! Common types used across the simulation core.

use thiserror::Error;

/// Outcome of checking a workload against host capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationVerdict {
    NotEnoughCapacity,
    Success,
}

/// Errors surfaced to the caller by core operations.
///
/// Capacity exhaustion is not listed here: it is an expected outcome and is
/// reported through structured results ([`AllocationVerdict`],
/// `PlacementResult`, `MigrationResult`) instead. Internal accounting
/// mismatches are programming defects and abort via assertion rather than
/// being returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("host {0} not found in topology")]
    HostNotFound(String),
    #[error("site {0} not found in topology")]
    SiteNotFound(String),
    #[error("workload #{workload_id} is not resident on host {host}")]
    NotResident { workload_id: u32, host: String },
}
