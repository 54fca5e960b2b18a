//! VM pool holds the VMs of a run in creation order and creates new ones on demand up to a fixed
//! ceiling.
//!
//! All VMs are built from one capacity template, so the pool is homogeneous. VMs are never removed,
//! which keeps both the pool size and VM ids monotonic for the whole run.

use crate::core::common::{RuntimeResources, VmId};
use crate::core::vm::Vm;

pub struct VmPool {
    vms: Vec<Vm>,
    max_vms: u64,
    vm_capacity: RuntimeResources,
    // Monotonically incrementing counter used for VM ids, the first VM gets id 1.
    total_allocated: u64,
}

impl VmPool {
    pub fn new(max_vms: u64, vm_capacity: RuntimeResources) -> Self {
        Self {
            vms: Vec::new(),
            max_vms,
            vm_capacity,
            total_allocated: 0,
        }
    }

    pub fn vms(&self) -> &[Vm] {
        &self.vms
    }

    pub(crate) fn vms_mut(&mut self) -> &mut [Vm] {
        &mut self.vms
    }

    pub fn len(&self) -> usize {
        self.vms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vms.is_empty()
    }

    pub fn max_vms(&self) -> u64 {
        self.max_vms
    }

    pub fn vm_capacity(&self) -> &RuntimeResources {
        &self.vm_capacity
    }

    pub fn is_full(&self) -> bool {
        self.vms.len() as u64 >= self.max_vms
    }

    /// Creates a new empty VM at the end of the pool, or returns `None` if the pool reached
    /// `max_vms`.
    pub fn allocate(&mut self) -> Option<&mut Vm> {
        if self.is_full() {
            return None;
        }
        self.total_allocated += 1;
        let id: VmId = self.total_allocated;
        self.vms.push(Vm::new(id, self.vm_capacity));
        self.vms.last_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::VmPool;
    use crate::core::common::RuntimeResources;

    #[test]
    fn test_allocate_until_full() {
        let mut pool = VmPool::new(2, RuntimeResources::new(10, 20));
        assert!(pool.is_empty());

        assert_eq!(1, pool.allocate().unwrap().id());
        assert_eq!(2, pool.allocate().unwrap().id());
        assert!(pool.is_full());
        assert!(pool.allocate().is_none());

        assert_eq!(2, pool.len());
        let ids: Vec<u64> = pool.vms().iter().map(|vm| vm.id()).collect();
        assert_eq!(vec![1, 2], ids);
        assert!(pool
            .vms()
            .iter()
            .all(|vm| vm.capacity() == &RuntimeResources::new(10, 20)));
    }
}
