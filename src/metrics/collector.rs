//! Implements storage for run metrics: decision counters and estimations over requested resources
//! and final VM utilization.

use average::{concatenate, Estimate, Max, Mean, Min, Variance};

use crate::core::allocator::interface::PlacementDecision;
use crate::core::application::Application;
use crate::core::vm_pool::VmPool;

concatenate!(
    Estimator,
    [Min, min],
    [Max, max],
    [Mean, mean],
    [Variance, population_variance]
);

#[derive(Debug, Default)]
pub struct EstimatorWrapper {
    estimator: Estimator,
}

impl std::fmt::Debug for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimator")
            .field("min", &self.min())
            .field("max", &self.max())
            .field("mean", &self.mean())
            .field("population_variance", &self.population_variance())
            .finish()
    }
}

impl EstimatorWrapper {
    pub fn new() -> Self {
        Self {
            estimator: Estimator::new(),
        }
    }

    pub fn add(&mut self, value: f64) {
        self.estimator.add(value);
    }

    pub fn min(&self) -> f64 {
        self.estimator.min()
    }

    pub fn max(&self) -> f64 {
        self.estimator.max()
    }

    pub fn mean(&self) -> f64 {
        self.estimator.mean()
    }

    pub fn population_variance(&self) -> f64 {
        self.estimator.population_variance()
    }
}

impl PartialEq for EstimatorWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.min() == other.min()
            && self.max() == other.max()
            && self.mean() == other.mean()
            && self.population_variance() == other.population_variance()
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct MetricsCollector {
    /// The number of applications that arrived and went through a placement decision.
    pub applications_submitted: u64,
    /// The number of applications placed on an already existing VM.
    pub applications_placed_on_existing: u64,
    /// The number of applications that caused a VM creation. Equals to the number of created VMs.
    pub applications_placed_on_new: u64,
    /// The number of applications rejected because of no capacity. Counted only from
    /// `PlacementDecision::Rejected`.
    pub applications_rejected: u64,

    /// Estimations for requested cpu over all submitted applications.
    pub cpu_request_stats: EstimatorWrapper,
    /// Estimations for requested ram over all submitted applications.
    pub ram_request_stats: EstimatorWrapper,

    /// Estimations for the used fraction of cpu per VM at the end of a run.
    pub vm_cpu_utilization_stats: EstimatorWrapper,
    /// Estimations for the used fraction of ram per VM at the end of a run.
    pub vm_ram_utilization_stats: EstimatorWrapper,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record_submission(&mut self, app: &Application) {
        self.applications_submitted += 1;
        self.cpu_request_stats.add(app.requests().cpu as f64);
        self.ram_request_stats.add(app.requests().ram as f64);
    }

    pub fn record_decision(&mut self, decision: &PlacementDecision) {
        match decision {
            PlacementDecision::PlacedOnExisting(_) => self.applications_placed_on_existing += 1,
            PlacementDecision::PlacedOnNew(_) => self.applications_placed_on_new += 1,
            PlacementDecision::Rejected => self.applications_rejected += 1,
        }
    }

    pub fn record_final_pool(&mut self, pool: &VmPool) {
        for vm in pool.vms() {
            let (cpu, ram) = vm.utilization();
            self.vm_cpu_utilization_stats.add(cpu);
            self.vm_ram_utilization_stats.add(ram);
        }
    }

    /// Every submitted application got exactly one decision.
    pub fn decisions_are_consistent(&self) -> bool {
        self.applications_submitted
            == self.applications_placed_on_existing
                + self.applications_placed_on_new
                + self.applications_rejected
    }
}

#[cfg(test)]
mod tests {
    use super::MetricsCollector;
    use crate::core::allocator::interface::PlacementDecision;
    use crate::core::application::Application;
    use crate::core::common::RuntimeResources;

    #[test]
    fn test_counters_follow_decisions() {
        let capacity = RuntimeResources::new(10, 20);
        let mut collector = MetricsCollector::new();

        for (id, decision) in [
            PlacementDecision::PlacedOnNew(1),
            PlacementDecision::PlacedOnExisting(1),
            PlacementDecision::Rejected,
        ]
        .iter()
        .enumerate()
        {
            let app = Application::new(
                id as u64 + 1,
                RuntimeResources::new(2 * (id as u64 + 1), 4),
                &capacity,
            )
            .unwrap();
            collector.record_submission(&app);
            collector.record_decision(decision);
        }

        assert_eq!(3, collector.applications_submitted);
        assert_eq!(1, collector.applications_placed_on_new);
        assert_eq!(1, collector.applications_placed_on_existing);
        assert_eq!(1, collector.applications_rejected);
        assert!(collector.decisions_are_consistent());

        assert_eq!(2.0, collector.cpu_request_stats.min());
        assert_eq!(6.0, collector.cpu_request_stats.max());
        assert_eq!(4.0, collector.cpu_request_stats.mean());
        assert_eq!(4.0, collector.ram_request_stats.mean());
    }
}
