//! Representation of a schedulable workload.

use serde::Serialize;

/// A schedulable unit of resource demand (generalizes a virtual machine).
///
/// A workload is characterized by its ID and its resource demand in abstract
/// CPU units. At any time it is either unplaced, resident on exactly one
/// host, or held by an in-flight migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Workload {
    pub id: u32,
    pub demand: u32,
}

impl Workload {
    /// Creates workload with specified ID and resource demand.
    pub fn new(id: u32, demand: u32) -> Self {
        Self { id, demand }
    }
}
