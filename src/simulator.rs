//! Represents entry point for the simulation: a tick-driven loop which feeds arrivals from a
//! demand source into the allocator.

use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use log::{info, warn};
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::core::allocator::interface::PlacementDecision;
use crate::core::allocator::Allocator;
use crate::core::common::{AppId, RuntimeResources};
use crate::core::errors::SimulationError;
use crate::core::summary::AllocationSummary;
use crate::metrics::collector::MetricsCollector;
use crate::simulation_callbacks::{RunForConfiguredTicksCallbacks, SimulationCallbacks};
use crate::trace::generator::RandomDemandGenerator;
use crate::trace::generic::DemandTrace;
use crate::trace::interface::DemandSource;

/// One placement decision, as reported to the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementEvent {
    pub tick: u64,
    pub app_id: AppId,
    pub requests: RuntimeResources,
    pub decision: PlacementDecision,
}

impl fmt::Display for PlacementEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decision {
            PlacementDecision::PlacedOnExisting(vm_id) => write!(
                f,
                "App#{} allocated to VM#{} (CPU={}, RAM={})",
                self.app_id, vm_id, self.requests.cpu, self.requests.ram
            ),
            PlacementDecision::PlacedOnNew(vm_id) => write!(
                f,
                "App#{} allocated to NEW VM#{} (CPU={}, RAM={})",
                self.app_id, vm_id, self.requests.cpu, self.requests.ram
            ),
            PlacementDecision::Rejected => {
                write!(f, "App#{} REJECTED (no capacity)", self.app_id)
            }
        }
    }
}

pub struct VmAllocationSimulation {
    pub config: Rc<SimulationConfig>,
    pub allocator: Allocator,
    pub metrics_collector: MetricsCollector,
    /// Every decision of the run in tick order, kept only with `keep_placement_events` (the
    /// default). Grows by one entry per arrival.
    pub placement_events: Vec<PlacementEvent>,

    demand_source: Box<dyn DemandSource>,
    // Last processed tick, ticks are numbered from 1.
    tick: u64,
}

impl VmAllocationSimulation {
    /// Creates a simulation with the demand source chosen by config: a replayed trace if
    /// `demand_trace_path` is set, otherwise random arrivals seeded with `seed`.
    pub fn new(config: Rc<SimulationConfig>) -> Result<Self, SimulationError> {
        config.validate()?;
        let demand_source: Box<dyn DemandSource> = match &config.demand_trace_path {
            Some(path) => {
                info!("Replaying demand trace from {:?}", path);
                Box::new(DemandTrace::from_file(path)?.into_source(config.vm_capacity))
            }
            None => Box::new(RandomDemandGenerator::from_config(&config)),
        };
        Self::with_demand_source(config, demand_source)
    }

    pub fn with_demand_source(
        config: Rc<SimulationConfig>,
        demand_source: Box<dyn DemandSource>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        info!(
            "Creating vm allocation simulation {:?} with config: {:?}",
            config.sim_name, config
        );

        Ok(Self {
            allocator: Allocator::new(config.max_vms, config.vm_capacity),
            metrics_collector: MetricsCollector::new(),
            placement_events: Default::default(),
            demand_source,
            tick: 0,
            config,
        })
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Known arrivals the demand source has not handed out yet.
    pub fn pending_demand_events(&self) -> usize {
        self.demand_source.pending_events()
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.ticks
    }

    /// Advances by one tick. At most one application arrives and it is fully placed (or
    /// rejected) before this returns.
    pub fn step(&mut self) -> Result<Option<PlacementDecision>, SimulationError> {
        self.tick += 1;

        let app = match self.demand_source.next_demand(self.tick)? {
            Some(app) => app,
            None => return Ok(None),
        };
        self.metrics_collector.record_submission(&app);

        let decision = self.allocator.place_application(&app);
        self.metrics_collector.record_decision(&decision);

        let event = PlacementEvent {
            tick: self.tick,
            app_id: app.id(),
            requests: *app.requests(),
            decision,
        };
        info!("{}", event);
        if self.config.keep_placement_events {
            self.placement_events.push(event);
        }

        Ok(Some(decision))
    }

    pub fn run(&mut self) -> Result<AllocationSummary, SimulationError> {
        self.run_with_callbacks(Box::new(RunForConfiguredTicksCallbacks {}))
    }

    pub fn run_with_callbacks(
        &mut self,
        mut callbacks: Box<dyn SimulationCallbacks>,
    ) -> Result<AllocationSummary, SimulationError> {
        callbacks.on_simulation_start(self);

        let t = Instant::now();
        while callbacks.on_step(self) {
            self.step()?;
        }
        let duration = t.elapsed().as_secs_f64();
        info!(
            "Processed {} ticks with {} arrivals in {:.2?}s",
            self.tick, self.metrics_collector.applications_submitted, duration
        );

        let pending_events = self.pending_demand_events();
        if pending_events > 0 {
            warn!(
                "{} demand events after tick {} were never replayed",
                pending_events, self.tick
            );
        }

        self.metrics_collector
            .record_final_pool(self.allocator.pool());

        callbacks.on_simulation_finish(self)?;
        Ok(self.summary())
    }

    /// Pool state plus totals counted from the returned decisions.
    pub fn summary(&self) -> AllocationSummary {
        self.allocator.drain_summary(
            self.metrics_collector.applications_submitted,
            self.metrics_collector.applications_rejected,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PlacementEvent;
    use crate::core::allocator::interface::PlacementDecision;
    use crate::core::common::RuntimeResources;

    #[test]
    fn test_placement_event_lines() {
        let mut event = PlacementEvent {
            tick: 1,
            app_id: 3,
            requests: RuntimeResources::new(3, 4),
            decision: PlacementDecision::PlacedOnExisting(1),
        };
        assert_eq!("App#3 allocated to VM#1 (CPU=3, RAM=4)", event.to_string());

        event.decision = PlacementDecision::PlacedOnNew(2);
        assert_eq!("App#3 allocated to NEW VM#2 (CPU=3, RAM=4)", event.to_string());

        event.decision = PlacementDecision::Rejected;
        assert_eq!("App#3 REJECTED (no capacity)", event.to_string());
    }
}
