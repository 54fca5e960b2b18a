use thiserror::Error;

use crate::core::common::{AppId, RuntimeResources};

/// A demand that must never reach the allocator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDemand {
    #[error("App#{app_id} requests zero resources: {requests:?}")]
    ZeroRequest {
        app_id: AppId,
        requests: RuntimeResources,
    },
    #[error("App#{app_id} requests {requests:?}, more than a single VM capacity {capacity:?}")]
    ExceedsVmCapacity {
        app_id: AppId,
        requests: RuntimeResources,
        capacity: RuntimeResources,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_vms must be positive")]
    ZeroMaxVms,
    #[error("ticks must be positive")]
    ZeroTicks,
    #[error("vm capacity must be positive in every dimension, got {0:?}")]
    ZeroVmCapacity(RuntimeResources),
    #[error("arrival probability must be within [0, 1], got {0}")]
    ArrivalProbabilityOutOfRange(f64),
}

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidDemand(#[from] InvalidDemand),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
