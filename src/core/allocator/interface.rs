use serde::Serialize;

use crate::core::application::Application;
use crate::core::common::VmId;
use crate::core::vm::Vm;

/// Terminal outcome for a single application. `Rejected` is an expected result when the pool is
/// at its ceiling and nothing has room, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlacementDecision {
    PlacedOnExisting(VmId),
    PlacedOnNew(VmId),
    Rejected,
}

impl PlacementDecision {
    pub fn vm_id(&self) -> Option<VmId> {
        match self {
            PlacementDecision::PlacedOnExisting(id) | PlacementDecision::PlacedOnNew(id) => {
                Some(*id)
            }
            PlacementDecision::Rejected => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        *self == PlacementDecision::Rejected
    }
}

// Trait which any placement policy over the existing VMs implements.
pub trait PlacementAlgorithm {
    // Picks a VM among `vms` (in creation order) that can host the application.
    // Returns its index in `vms` or None if no existing VM has room.
    fn select_vm(&self, app: &Application, vms: &[Vm]) -> Option<usize>;
}
