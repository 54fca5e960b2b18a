//! Allocator owns the VM pool and decides, for each arriving application, which VM receives it,
//! when a new VM is created and when the application is rejected.

pub mod first_fit;
pub mod interface;

use log::debug;

use crate::core::allocator::first_fit::FirstFit;
use crate::core::allocator::interface::{PlacementAlgorithm, PlacementDecision};
use crate::core::application::Application;
use crate::core::common::RuntimeResources;
use crate::core::summary::{AllocationSummary, VmSummary};
use crate::core::vm_pool::VmPool;

pub struct Allocator {
    pool: VmPool,
    algorithm: Box<dyn PlacementAlgorithm>,
}

impl Allocator {
    pub fn new(max_vms: u64, vm_capacity: RuntimeResources) -> Self {
        Self::with_algorithm(max_vms, vm_capacity, Box::new(FirstFit {}))
    }

    pub fn with_algorithm(
        max_vms: u64,
        vm_capacity: RuntimeResources,
        algorithm: Box<dyn PlacementAlgorithm>,
    ) -> Self {
        Self {
            pool: VmPool::new(max_vms, vm_capacity),
            algorithm,
        }
    }

    pub fn pool(&self) -> &VmPool {
        &self.pool
    }

    /// Places the application on an existing VM if one has room, otherwise on a newly created VM
    /// while the pool is below its ceiling. Rejection is final, the application is not retained.
    ///
    /// Selection and accounting happen under the same `&mut self` borrow, so no other placement
    /// can observe the VM between the capacity check and the mutation.
    pub fn place_application(&mut self, app: &Application) -> PlacementDecision {
        if let Some(idx) = self.algorithm.select_vm(app, self.pool.vms()) {
            let vm = &mut self.pool.vms_mut()[idx];
            vm.host(app);
            return PlacementDecision::PlacedOnExisting(vm.id());
        }

        match self.pool.allocate() {
            Some(vm) => {
                debug!("Created VM#{} for App#{}", vm.id(), app.id());
                vm.host(app);
                PlacementDecision::PlacedOnNew(vm.id())
            }
            None => PlacementDecision::Rejected,
        }
    }

    /// Read-only report of the pool state together with run totals which are tracked outside of
    /// the allocator.
    pub fn drain_summary(
        &self,
        applications_submitted: u64,
        applications_rejected: u64,
    ) -> AllocationSummary {
        AllocationSummary {
            max_vms: self.pool.max_vms(),
            vms: self
                .pool
                .vms()
                .iter()
                .map(|vm| VmSummary {
                    id: vm.id(),
                    hosted_apps: vm.hosted_apps().to_vec(),
                    used: *vm.usage(),
                    capacity: *vm.capacity(),
                })
                .collect(),
            applications_submitted,
            applications_rejected,
        }
    }
}
