//! Represents generic format for a recorded demand trace that is replayed tick by tick.
//!
//! A trace is a list of arrivals `(tick, cpu, ram)`, read either from YAML
//! (`events: [{tick, cpu, ram}, ...]`) or from a headerless CSV with the same three columns.

use std::collections::VecDeque;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::core::application::Application;
use crate::core::common::{AppId, RuntimeResources};
use crate::core::errors::{InvalidDemand, SimulationError};
use crate::trace::interface::DemandSource;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct DemandTrace {
    pub events: Vec<DemandEvent>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DemandEvent {
    pub tick: u64,
    pub cpu: u64,
    pub ram: u64,
}

impl DemandTrace {
    pub fn from_yaml_str(trace_str: &str) -> Result<Self, SimulationError> {
        Ok(serde_yaml::from_str(trace_str)?)
    }

    pub fn from_csv_str(trace_str: &str) -> Result<Self, SimulationError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(trace_str.as_bytes());

        let mut events: Vec<DemandEvent> = vec![];
        for row in csv_reader.deserialize() {
            events.push(row?);
        }
        Ok(Self { events })
    }

    /// Picks the format by file extension: `.csv` is read as CSV, anything else as YAML.
    pub fn from_file(path: &Path) -> Result<Self, SimulationError> {
        let trace_str = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Self::from_csv_str(&trace_str),
            _ => Self::from_yaml_str(&trace_str),
        }
    }

    /// Converts the trace into a replaying demand source. Events are ordered by tick, events
    /// sharing a tick keep their order from the trace.
    pub fn into_source(self, vm_capacity: RuntimeResources) -> TraceDemandSource {
        let mut events = self.events;
        events.sort_by_key(|event| event.tick);
        TraceDemandSource {
            events: events.into(),
            vm_capacity,
            next_app_id: 1,
        }
    }
}

pub struct TraceDemandSource {
    events: VecDeque<DemandEvent>,
    vm_capacity: RuntimeResources,
    next_app_id: AppId,
}

impl DemandSource for TraceDemandSource {
    fn next_demand(&mut self, tick: u64) -> Result<Option<Application>, InvalidDemand> {
        // At most one arrival per tick: anything left behind from earlier ticks is dropped.
        while self.events.front().map_or(false, |event| event.tick < tick) {
            if let Some(skipped) = self.events.pop_front() {
                if skipped.tick == 0 {
                    warn!("Skipping trace event {:?}: ticks start at 1", skipped);
                } else {
                    warn!(
                        "Skipping trace event {:?}: tick {} already had an arrival",
                        skipped, skipped.tick
                    );
                }
            }
        }

        let requests = match self.events.front() {
            Some(event) if event.tick == tick => RuntimeResources::new(event.cpu, event.ram),
            _ => return Ok(None),
        };
        let app = Application::new(self.next_app_id, requests, &self.vm_capacity)?;
        self.events.pop_front();
        self.next_app_id += 1;
        Ok(Some(app))
    }

    fn pending_events(&self) -> usize {
        self.events.len()
    }
}
