//! Type definition for a VM: a fixed capacity container which accumulates hosted applications.

use serde::Serialize;

use crate::core::application::Application;
use crate::core::common::{AppId, RuntimeResources, VmId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vm {
    id: VmId,
    capacity: RuntimeResources,
    // Only grows: applications are never evicted.
    usage: RuntimeResources,
    // In arrival order.
    hosted_apps: Vec<AppId>,
}

impl Vm {
    pub fn new(id: VmId, capacity: RuntimeResources) -> Self {
        Self {
            id,
            capacity,
            usage: Default::default(),
            hosted_apps: Default::default(),
        }
    }

    pub fn id(&self) -> VmId {
        self.id
    }

    pub fn capacity(&self) -> &RuntimeResources {
        &self.capacity
    }

    pub fn usage(&self) -> &RuntimeResources {
        &self.usage
    }

    pub fn hosted_apps(&self) -> &[AppId] {
        &self.hosted_apps
    }

    pub fn can_host(&self, app: &Application) -> bool {
        self.usage.fits_with(app.requests(), &self.capacity)
    }

    /// Accounts the application on this VM.
    ///
    /// The caller must have checked [`Vm::can_host`] for this application; it is not evaluated
    /// again here outside of debug builds.
    pub fn host(&mut self, app: &Application) {
        debug_assert!(
            self.can_host(app),
            "App#{} does not fit VM#{} (used {:?} of {:?})",
            app.id(),
            self.id,
            self.usage,
            self.capacity
        );
        self.usage += app.requests();
        self.hosted_apps.push(app.id());
    }

    /// Used fraction of cpu and ram capacity.
    pub fn utilization(&self) -> (f64, f64) {
        (
            self.usage.cpu as f64 / self.capacity.cpu as f64,
            self.usage.ram as f64 / self.capacity.ram as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Vm;
    use crate::core::application::Application;
    use crate::core::common::RuntimeResources;

    fn app(id: u64, cpu: u64, ram: u64) -> Application {
        Application::new(id, RuntimeResources::new(cpu, ram), &RuntimeResources::new(10, 20))
            .unwrap()
    }

    #[test]
    fn test_host_accumulates_usage_in_arrival_order() {
        let mut vm = Vm::new(1, RuntimeResources::new(10, 20));
        vm.host(&app(4, 3, 4));
        vm.host(&app(9, 6, 10));

        assert_eq!(&RuntimeResources::new(9, 14), vm.usage());
        assert_eq!(&[4, 9], vm.hosted_apps());
        assert_eq!((0.9, 0.7), vm.utilization());
    }

    #[test]
    fn test_cannot_host_when_ram_is_short() {
        let mut vm = Vm::new(1, RuntimeResources::new(10, 20));
        vm.host(&app(1, 1, 15));
        // plenty of cpu left, but 15 + 6 > 20
        assert!(!vm.can_host(&app(2, 1, 6)));
        assert!(vm.can_host(&app(3, 9, 5)));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_host_without_room_panics_in_debug() {
        let mut vm = Vm::new(1, RuntimeResources::new(10, 20));
        vm.host(&app(1, 8, 1));
        vm.host(&app(2, 8, 1));
    }
}
