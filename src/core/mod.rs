pub mod common;
pub mod config;
pub mod disk_scheduling_algorithm;
pub mod disk_scheduling_algorithms;
pub mod host;
pub mod logger;
pub mod migration;
pub mod placement;
pub mod placement_algorithm;
pub mod placement_algorithms;
pub mod topology;
pub mod workload;
