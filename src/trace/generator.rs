//! Random demand: a Bernoulli arrival gate per tick and uniformly distributed resource needs.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::config::SimulationConfig;
use crate::core::application::Application;
use crate::core::common::{AppId, RuntimeResources};
use crate::core::errors::InvalidDemand;
use crate::trace::interface::DemandSource;

/// Generates applications with needs in `[1, capacity / 2]` for each dimension, so that any fresh
/// VM can host at least one of them. With a capacity of 1 the upper bound is clamped to 1.
pub struct RandomDemandGenerator {
    rand: Pcg64,
    arrival_probability: f64,
    vm_capacity: RuntimeResources,
    next_app_id: AppId,
}

impl RandomDemandGenerator {
    pub fn new(seed: u64, arrival_probability: f64, vm_capacity: RuntimeResources) -> Self {
        Self {
            rand: Pcg64::seed_from_u64(seed),
            arrival_probability,
            vm_capacity,
            next_app_id: 1,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.seed, config.arrival_probability, config.vm_capacity)
    }

    /// Draws the arrival gate for one tick.
    pub fn arrives(&mut self) -> bool {
        self.rand.gen_range(0.0..1.0) < self.arrival_probability
    }

    pub fn generate_app(&mut self) -> Result<Application, InvalidDemand> {
        let cpu = self.rand.gen_range(1..=(self.vm_capacity.cpu / 2).max(1));
        let ram = self.rand.gen_range(1..=(self.vm_capacity.ram / 2).max(1));
        let app = Application::new(
            self.next_app_id,
            RuntimeResources::new(cpu, ram),
            &self.vm_capacity,
        )?;
        self.next_app_id += 1;
        Ok(app)
    }
}

impl DemandSource for RandomDemandGenerator {
    fn next_demand(&mut self, _tick: u64) -> Result<Option<Application>, InvalidDemand> {
        if !self.arrives() {
            return Ok(None);
        }
        self.generate_app().map(Some)
    }
}
