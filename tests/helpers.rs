use vm_allocation_simulator::core::allocator::interface::PlacementDecision;
use vm_allocation_simulator::core::allocator::Allocator;
use vm_allocation_simulator::core::application::Application;
use vm_allocation_simulator::core::common::RuntimeResources;

pub const VM_CAPACITY: RuntimeResources = RuntimeResources { cpu: 10, ram: 20 };

pub struct AppFactory {
    next_id: u64,
}

impl AppFactory {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn create(&mut self, cpu: u64, ram: u64) -> Application {
        let app = Application::new(self.next_id, RuntimeResources::new(cpu, ram), &VM_CAPACITY)
            .unwrap();
        self.next_id += 1;
        app
    }
}

pub fn place(
    allocator: &mut Allocator,
    apps: &mut AppFactory,
    cpu: u64,
    ram: u64,
) -> PlacementDecision {
    let app = apps.create(cpu, ram);
    allocator.place_application(&app)
}

pub fn check_vm_usage(allocator: &Allocator, vm_id: u64, cpu: u64, ram: u64) {
    let vm = allocator
        .pool()
        .vms()
        .iter()
        .find(|vm| vm.id() == vm_id)
        .unwrap_or_else(|| panic!("VM#{} does not exist", vm_id));
    assert_eq!(&RuntimeResources::new(cpu, ram), vm.usage());
}
