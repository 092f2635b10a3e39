//! Two-level topology of sites and hosts.

use indexmap::IndexMap;

use crate::core::common::SimulationError;
use crate::core::config::SimulationConfig;
use crate::core::host::Host;

/// Static two-level topology: named sites, each holding an ordered sequence
/// of hosts. Site order and host order within a site are insertion order and
/// define the scan order of placement.
///
/// The topology is built once at session start and owned by a single session;
/// all mutations go through host methods obtained from here.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    sites: IndexMap<String, Vec<String>>,
    hosts: IndexMap<String, Host>,
}

impl Topology {
    /// Creates empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a topology from the simulation config by expanding site and
    /// host group definitions.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        let mut topology = Self::new();
        for (site_idx, site_config) in config.sites.iter().enumerate() {
            let site_name = match &site_config.name {
                Some(name) => name.clone(),
                None => format!("site-{}", site_idx + 1),
            };
            topology.add_site(&site_name)?;
            for host_config in &site_config.hosts {
                let count = host_config.count.unwrap_or(1);
                let capacity = host_config.capacity.unwrap_or(config.host_capacity);
                for i in 0..count {
                    let host_name = if count == 1 && host_config.name.is_some() {
                        host_config.name.clone().unwrap()
                    } else {
                        let prefix = host_config
                            .name_prefix
                            .clone()
                            .or_else(|| host_config.name.clone())
                            .unwrap_or_else(|| format!("{}-host", site_name));
                        format!("{}{}", prefix, i + 1)
                    };
                    topology.add_host(&site_name, &host_name, capacity)?;
                }
            }
        }
        Ok(topology)
    }

    /// Adds an empty site. Site names must be unique.
    pub fn add_site(&mut self, name: &str) -> Result<(), SimulationError> {
        if self.sites.contains_key(name) {
            return Err(SimulationError::InvalidInput(format!(
                "site {} already exists",
                name
            )));
        }
        self.sites.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Adds a host with the given capacity to the specified site.
    /// Host names must be unique across the whole topology.
    pub fn add_host(&mut self, site: &str, name: &str, capacity: u32) -> Result<(), SimulationError> {
        if self.hosts.contains_key(name) {
            return Err(SimulationError::InvalidInput(format!(
                "host {} already exists",
                name
            )));
        }
        let site_hosts = self
            .sites
            .get_mut(site)
            .ok_or_else(|| SimulationError::SiteNotFound(site.to_string()))?;
        site_hosts.push(name.to_string());
        self.hosts.insert(name.to_string(), Host::new(name, capacity));
        Ok(())
    }

    /// Returns site names in insertion order.
    pub fn sites(&self) -> Vec<&str> {
        self.sites.keys().map(|s| s.as_str()).collect()
    }

    /// Returns host names of the specified site in insertion order.
    pub fn site_hosts(&self, site: &str) -> Result<Vec<&str>, SimulationError> {
        let hosts = self
            .sites
            .get(site)
            .ok_or_else(|| SimulationError::SiteNotFound(site.to_string()))?;
        Ok(hosts.iter().map(|h| h.as_str()).collect())
    }

    /// Returns the host with the specified name.
    pub fn host(&self, name: &str) -> Result<&Host, SimulationError> {
        self.hosts
            .get(name)
            .ok_or_else(|| SimulationError::HostNotFound(name.to_string()))
    }

    /// Returns mutable reference to the host with the specified name.
    pub fn host_mut(&mut self, name: &str) -> Result<&mut Host, SimulationError> {
        self.hosts
            .get_mut(name)
            .ok_or_else(|| SimulationError::HostNotFound(name.to_string()))
    }

    /// Returns all host names in scan order (sites in order, hosts within a
    /// site in order).
    pub fn host_names(&self) -> Vec<&str> {
        self.sites
            .values()
            .flat_map(|hosts| hosts.iter().map(|h| h.as_str()))
            .collect()
    }

    /// Returns the number of hosts.
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }

    /// Returns the name of the host where the specified workload is resident,
    /// if any.
    pub fn find_resident(&self, workload_id: u32) -> Option<&str> {
        self.hosts
            .values()
            .find(|host| host.is_resident(workload_id))
            .map(|host| host.name.as_str())
    }
}
