//! Simulation configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Holds raw simulation config parsed from YAML file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct RawSimulationConfig {
    pub total_cylinders: Option<u32>,
    pub host_capacity: Option<u32>,
    pub sites: Option<Vec<SiteConfig>>,
}

/// Holds configuration of a single host or a set of identical hosts.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HostConfig {
    /// Host name.
    /// Should be set if count = 1.
    pub name: Option<String>,
    /// Host name prefix.
    /// Full name is produced by appending host instance number to the prefix.
    /// Should be set if count > 1.
    pub name_prefix: Option<String>,
    /// Host capacity in abstract CPU units.
    /// Defaults to the global `host_capacity` if absent.
    pub capacity: Option<u32>,
    /// Number of such hosts.
    pub count: Option<u32>,
}

/// Holds configuration of a single site and its hosts.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SiteConfig {
    /// Site name.
    pub name: Option<String>,
    /// Hosts of this site in scan order.
    pub hosts: Vec<HostConfig>,
}

/// Represents simulation configuration.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Number of disk cylinders, valid positions are `0..total_cylinders`.
    pub total_cylinders: u32,
    /// Default host capacity used when a host config omits it.
    pub host_capacity: u32,
    /// Sites with their hosts in scan order.
    pub sites: Vec<SiteConfig>,
}

impl SimulationConfig {
    /// Creates simulation config with default parameter values.
    pub fn new() -> Self {
        Self {
            total_cylinders: 200,
            host_capacity: 100,
            sites: Vec::new(),
        }
    }

    /// Creates simulation config by reading parameter values from .yaml file
    /// (uses default values if some parameters are absent).
    pub fn from_file(file_name: &str) -> Self {
        let raw: RawSimulationConfig = serde_yaml::from_str(
            &std::fs::read_to_string(file_name).unwrap_or_else(|_| panic!("Can't read file {}", file_name)),
        )
        .unwrap_or_else(|_| panic!("Can't parse YAML from file {}", file_name));
        let default = SimulationConfig::new();
        Self {
            total_cylinders: raw.total_cylinders.unwrap_or(default.total_cylinders),
            host_capacity: raw.host_capacity.unwrap_or(default.host_capacity),
            sites: raw.sites.unwrap_or_default(),
        }
    }

    /// Returns total hosts count across all sites.
    pub fn number_of_hosts(&self) -> u32 {
        let mut result = 0;
        for site in &self.sites {
            for host in &site.hosts {
                result += host.count.unwrap_or(1);
            }
        }
        result
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses config value string, which consists of two parts - name and options.
/// Example: SSTF[tie_break=smaller] parts are name SSTF and options string
/// "tie_break=smaller".
pub fn parse_config_value(config_str: &str) -> (String, Option<String>) {
    match config_str.split_once('[') {
        Some((l, r)) => (l.to_string(), Some(r.to_string().replace(']', ""))),
        None => (config_str.to_string(), None),
    }
}

/// Parses options string from config value, returns map with option names and values.
pub fn parse_options(options_str: &str) -> HashMap<String, String> {
    let mut options = HashMap::new();
    for option_str in options_str.split(',') {
        if let Some((name, value)) = option_str.split_once('=') {
            options.insert(name.to_string(), value.to_string());
        }
    }
    options
}
