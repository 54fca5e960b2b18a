//! Simulation callbacks interface and implementations to define how simulator should behave on start,
//! step, finish and when it should stop running.

use log::info;

use crate::core::errors::SimulationError;
use crate::metrics::printer::{log_summary, print_metrics};
use crate::simulator::VmAllocationSimulation;

pub trait SimulationCallbacks {
    /// Runs before starting a simulation run.
    fn on_simulation_start(&mut self, _sim: &mut VmAllocationSimulation) {}

    /// Runs before each tick of a simulation run, returns false if the simulation must be stopped.
    fn on_step(&mut self, _sim: &mut VmAllocationSimulation) -> bool {
        true
    }

    /// Runs upon the completion of a simulation run.
    fn on_simulation_finish(
        &mut self,
        _sim: &mut VmAllocationSimulation,
    ) -> Result<(), SimulationError> {
        Ok(())
    }
}

/// Runs exactly `ticks` ticks from config, then logs the summary and prints metrics if a printer
/// is configured.
pub struct RunForConfiguredTicksCallbacks {}

fn assert_and_print(sim: &mut VmAllocationSimulation) -> Result<(), SimulationError> {
    assert!(sim.metrics_collector.decisions_are_consistent());

    let summary = sim.summary();
    log_summary(sim.tick(), &summary);

    if let Some(printer_config) = sim.config.metrics_printer.as_ref() {
        info!("Writing metrics to {:?}", printer_config.output_file);
        print_metrics(&sim.metrics_collector, &summary, printer_config)?;
    }
    Ok(())
}

impl SimulationCallbacks for RunForConfiguredTicksCallbacks {
    fn on_step(&mut self, sim: &mut VmAllocationSimulation) -> bool {
        !sim.is_finished()
    }

    fn on_simulation_finish(
        &mut self,
        sim: &mut VmAllocationSimulation,
    ) -> Result<(), SimulationError> {
        assert_and_print(sim)
    }
}

/// Stops at the first rejection or after `ticks` ticks, whichever comes first. Useful to find how
/// long a pool of a given size lasts under a demand stream.
pub struct RunUntilFirstRejectionCallbacks {}

impl SimulationCallbacks for RunUntilFirstRejectionCallbacks {
    fn on_step(&mut self, sim: &mut VmAllocationSimulation) -> bool {
        !sim.is_finished() && sim.metrics_collector.applications_rejected == 0
    }

    fn on_simulation_finish(
        &mut self,
        sim: &mut VmAllocationSimulation,
    ) -> Result<(), SimulationError> {
        if sim.metrics_collector.applications_rejected > 0 {
            info!("First rejection at tick {}", sim.tick());
        }
        assert_and_print(sim)
    }
}
