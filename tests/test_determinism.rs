use std::rc::Rc;

use vm_allocation_simulator::core::summary::AllocationSummary;
use vm_allocation_simulator::metrics::collector::MetricsCollector;
use vm_allocation_simulator::simulator::{PlacementEvent, VmAllocationSimulation};
use vm_allocation_simulator::test_util::helpers::default_test_simulation_config;

fn run_simulation(seed: u64) -> (AllocationSummary, Vec<PlacementEvent>, MetricsCollector) {
    let mut config = default_test_simulation_config(None);
    config.seed = seed;
    config.ticks = 2000;
    config.max_vms = 50;

    let mut sim = VmAllocationSimulation::new(Rc::new(config)).unwrap();
    let summary = sim.run().unwrap();
    (summary, sim.placement_events, sim.metrics_collector)
}

#[test]
pub fn test_simulation_determinism() {
    let (first_summary, first_events, first_metrics) = run_simulation(46);

    for _ in 0..10 {
        let (summary, events, metrics) = run_simulation(46);

        assert_eq!(first_summary, summary);
        assert_eq!(first_events, events);
        assert_eq!(first_metrics, metrics);
    }
}

#[test]
pub fn test_different_seeds_differ() {
    let (first_summary, first_events, _) = run_simulation(1);
    let (second_summary, second_events, _) = run_simulation(2);

    assert!(first_summary != second_summary || first_events != second_events);
}
