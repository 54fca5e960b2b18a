//! Type definition for an application, the unit of demand placed onto VMs.

use serde::Serialize;

use crate::core::common::{AppId, RuntimeResources};
use crate::core::errors::InvalidDemand;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    id: AppId,
    requests: RuntimeResources,
}

impl Application {
    /// Builds an application whose requests are positive and fit into a single empty VM of
    /// `vm_capacity`, so that a freshly created VM can always host it.
    pub fn new(
        id: AppId,
        requests: RuntimeResources,
        vm_capacity: &RuntimeResources,
    ) -> Result<Self, InvalidDemand> {
        if requests.has_zero_dimension() {
            return Err(InvalidDemand::ZeroRequest {
                app_id: id,
                requests,
            });
        }
        if !RuntimeResources::default().fits_with(&requests, vm_capacity) {
            return Err(InvalidDemand::ExceedsVmCapacity {
                app_id: id,
                requests,
                capacity: *vm_capacity,
            });
        }
        Ok(Self { id, requests })
    }

    pub fn id(&self) -> AppId {
        self.id
    }

    pub fn requests(&self) -> &RuntimeResources {
        &self.requests
    }
}
