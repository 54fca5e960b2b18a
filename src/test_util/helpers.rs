use std::collections::HashMap;

use crate::config::SimulationConfig;
use crate::core::allocator::Allocator;
use crate::core::common::{AppId, RuntimeResources};
use crate::simulator::VmAllocationSimulation;

pub fn default_test_simulation_config(with_suffix: Option<&str>) -> SimulationConfig {
    let mut default = r#"
    sim_name: "test_vm_allocation"
    seed: 123
    ticks: 20
    max_vms: 2
    vm_capacity:
      cpu: 10
      ram: 20
    "#
    .to_string();

    if let Some(suffix) = with_suffix {
        default.push_str(suffix);
    }

    serde_yaml::from_str::<SimulationConfig>(&default).unwrap()
}

/// Capacity invariant, monotonic ids and the pool ceiling.
pub fn check_pool_invariants(allocator: &Allocator) {
    let pool = allocator.pool();
    assert!(pool.len() as u64 <= pool.max_vms());

    let mut previous_id = 0;
    for vm in pool.vms() {
        assert!(vm.id() > previous_id);
        previous_id = vm.id();
        assert!(vm.usage().cpu <= vm.capacity().cpu);
        assert!(vm.usage().ram <= vm.capacity().ram);
        assert_eq!(vm.capacity(), pool.vm_capacity());
    }
}

/// Used resources of every VM equal the sum of requests of the applications it hosts, and every
/// placed application is hosted exactly where its decision says.
pub fn check_conservation(sim: &VmAllocationSimulation) {
    let requests: HashMap<AppId, RuntimeResources> = sim
        .placement_events
        .iter()
        .map(|event| (event.app_id, event.requests))
        .collect();

    for vm in sim.allocator.pool().vms() {
        let mut expected = RuntimeResources::default();
        for app_id in vm.hosted_apps() {
            expected += &requests[app_id];
        }
        assert_eq!(&expected, vm.usage(), "VM#{}", vm.id());
    }

    for event in sim.placement_events.iter() {
        match event.decision.vm_id() {
            Some(vm_id) => {
                let vm = &sim.allocator.pool().vms()[vm_id as usize - 1];
                assert!(vm.hosted_apps().contains(&event.app_id));
            }
            None => assert!(sim
                .allocator
                .pool()
                .vms()
                .iter()
                .all(|vm| !vm.hosted_apps().contains(&event.app_id))),
        }
    }
}
