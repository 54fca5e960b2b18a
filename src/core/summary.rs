//! End-of-run report types.

use serde::Serialize;

use crate::core::common::{AppId, RuntimeResources, VmId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmSummary {
    pub id: VmId,
    pub hosted_apps: Vec<AppId>,
    pub used: RuntimeResources,
    pub capacity: RuntimeResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    pub max_vms: u64,
    /// In creation order.
    pub vms: Vec<VmSummary>,
    pub applications_submitted: u64,
    pub applications_rejected: u64,
}
