//! Config fields definitions for the vm allocation simulation

use std::path::PathBuf;

use serde::Deserialize;

use crate::core::common::RuntimeResources;
use crate::core::errors::ConfigError;
use crate::metrics::printer::MetricsPrinterConfig;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "sim_name_default")]
    pub sim_name: String,
    pub seed: u64,
    /// Number of discrete steps to simulate, at most one application arrives per tick.
    pub ticks: u64,
    /// Ceiling on the pool size.
    pub max_vms: u64,
    /// Capacity of every VM in the pool.
    pub vm_capacity: RuntimeResources,
    #[serde(default = "arrival_probability_default")]
    pub arrival_probability: f64,
    /// If not set default output of logs is stderr
    pub logs_filepath: Option<String>,
    /// If set, arrivals are replayed from this trace instead of being generated randomly.
    pub demand_trace_path: Option<PathBuf>,
    pub metrics_printer: Option<MetricsPrinterConfig>,
    /// Keep every placement decision in memory for inspection after the run. Decisions are
    /// logged either way.
    #[serde(default = "keep_placement_events_default")]
    pub keep_placement_events: bool,
}

fn sim_name_default() -> String {
    "vm_allocation".to_string()
}

fn arrival_probability_default() -> f64 {
    0.4
}

fn keep_placement_events_default() -> bool {
    true
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sim_name: sim_name_default(),
            seed: 123,
            ticks: 20,
            max_vms: 5,
            vm_capacity: RuntimeResources::new(10, 20),
            arrival_probability: arrival_probability_default(),
            logs_filepath: None,
            demand_trace_path: None,
            metrics_printer: None,
            keep_placement_events: keep_placement_events_default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_vms == 0 {
            return Err(ConfigError::ZeroMaxVms);
        }
        if self.ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        if self.vm_capacity.has_zero_dimension() {
            return Err(ConfigError::ZeroVmCapacity(self.vm_capacity));
        }
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(ConfigError::ArrivalProbabilityOutOfRange(
                self.arrival_probability,
            ));
        }
        Ok(())
    }
}
