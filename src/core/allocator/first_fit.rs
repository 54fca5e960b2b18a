use crate::core::allocator::interface::PlacementAlgorithm;
use crate::core::application::Application;
use crate::core::vm::Vm;

/// Strict first-fit: the scan stops at the oldest VM with room, even if a later VM would waste
/// less capacity.
pub struct FirstFit {}

impl PlacementAlgorithm for FirstFit {
    fn select_vm(&self, app: &Application, vms: &[Vm]) -> Option<usize> {
        vms.iter().position(|vm| vm.can_host(app))
    }
}
