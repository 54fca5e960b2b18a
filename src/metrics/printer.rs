use log::info;
use prettytable::{row, Table};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Write};

use crate::core::errors::SimulationError;
use crate::core::summary::AllocationSummary;
use crate::metrics::collector::{EstimatorWrapper, MetricsCollector};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub enum OutputFormat {
    #[default]
    JSON,
    PrettyTable,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetricsPrinterConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub output_file: std::path::PathBuf,
}

/// Logs the end-of-run summary, one line per VM.
pub fn log_summary(ticks: u64, summary: &AllocationSummary) {
    info!("=== Simulation Summary ===");
    info!("Ticks: {}", ticks);
    info!("VMs created: {}/{}", summary.vms.len(), summary.max_vms);
    for vm in summary.vms.iter() {
        let hosted_apps: Vec<String> = vm.hosted_apps.iter().map(|id| id.to_string()).collect();
        info!(
            "VM#{} hosted apps: {} (Used CPU={}/{}, RAM={}/{})",
            vm.id,
            hosted_apps.join(" "),
            vm.used.cpu,
            vm.capacity.cpu,
            vm.used.ram,
            vm.capacity.ram
        );
    }
    info!(
        "Submitted: {}, Rejected: {}",
        summary.applications_submitted, summary.applications_rejected
    );
}

pub fn print_metrics(
    collector: &MetricsCollector,
    summary: &AllocationSummary,
    config: &MetricsPrinterConfig,
) -> Result<(), SimulationError> {
    match config.format {
        OutputFormat::PrettyTable => {
            print_metrics_as_pretty_table(collector, summary, &config.output_file)
        }
        OutputFormat::JSON => print_metrics_as_json(collector, summary, &config.output_file),
    }
}

pub fn print_metrics_as_pretty_table(
    metrics: &MetricsCollector,
    summary: &AllocationSummary,
    output_file: &std::path::PathBuf,
) -> Result<(), SimulationError> {
    let mut metrics_file = File::create(output_file)?;

    let mut aggregated_table = Table::new();
    aggregated_table.add_row(row!["Metric", "Count"]);
    aggregated_table.add_row(row!["Applications submitted", metrics.applications_submitted]);
    aggregated_table.add_row(row![
        "Placed on existing VM",
        metrics.applications_placed_on_existing
    ]);
    aggregated_table.add_row(row!["Placed on new VM", metrics.applications_placed_on_new]);
    aggregated_table.add_row(row!["Applications rejected", metrics.applications_rejected]);
    aggregated_table.add_row(row![
        "VMs created",
        format!("{}/{}", summary.vms.len(), summary.max_vms)
    ]);

    let mut stats_table = Table::new();
    stats_table.add_row(row!["Metric", "Min", "Max", "Mean", "Variance"]);
    for (name, stats) in [
        ("Requested CPU", &metrics.cpu_request_stats),
        ("Requested RAM", &metrics.ram_request_stats),
        ("VM CPU utilization", &metrics.vm_cpu_utilization_stats),
        ("VM RAM utilization", &metrics.vm_ram_utilization_stats),
    ] {
        stats_table.add_row(row![
            name,
            stats.min(),
            stats.max(),
            stats.mean(),
            stats.population_variance()
        ]);
    }

    let mut vms_table = Table::new();
    vms_table.add_row(row!["VM", "Hosted apps", "CPU", "RAM"]);
    for vm in summary.vms.iter() {
        let hosted_apps: Vec<String> = vm.hosted_apps.iter().map(|id| id.to_string()).collect();
        vms_table.add_row(row![
            vm.id,
            hosted_apps.join(" "),
            format!("{}/{}", vm.used.cpu, vm.capacity.cpu),
            format!("{}/{}", vm.used.ram, vm.capacity.ram)
        ]);
    }

    aggregated_table.print(&mut metrics_file)?;
    stats_table.print(&mut metrics_file)?;
    vms_table.print(&mut metrics_file)?;
    Ok(())
}

#[derive(Serialize)]
struct MetricsJSON<'a> {
    counters: Counters,
    stats: Stats,
    summary: &'a AllocationSummary,
}

#[derive(Serialize)]
struct Counters {
    applications_submitted: u64,
    applications_placed_on_existing: u64,
    applications_placed_on_new: u64,
    applications_rejected: u64,
}

#[derive(Serialize)]
struct Stats {
    cpu_request: EstimationStats,
    ram_request: EstimationStats,
    vm_cpu_utilization: EstimationStats,
    vm_ram_utilization: EstimationStats,
}

#[derive(Serialize)]
struct EstimationStats {
    min: f64,
    max: f64,
    mean: f64,
    variance: f64,
}

impl From<&EstimatorWrapper> for EstimationStats {
    fn from(estimator: &EstimatorWrapper) -> Self {
        Self {
            min: estimator.min(),
            max: estimator.max(),
            mean: estimator.mean(),
            variance: estimator.population_variance(),
        }
    }
}

pub fn print_metrics_as_json(
    metrics: &MetricsCollector,
    summary: &AllocationSummary,
    output_file: &std::path::PathBuf,
) -> Result<(), SimulationError> {
    let mut metrics_file = File::create(output_file)?;

    let metrics = MetricsJSON {
        counters: Counters {
            applications_submitted: metrics.applications_submitted,
            applications_placed_on_existing: metrics.applications_placed_on_existing,
            applications_placed_on_new: metrics.applications_placed_on_new,
            applications_rejected: metrics.applications_rejected,
        },
        stats: Stats {
            cpu_request: (&metrics.cpu_request_stats).into(),
            ram_request: (&metrics.ram_request_stats).into(),
            vm_cpu_utilization: (&metrics.vm_cpu_utilization_stats).into(),
            vm_ram_utilization: (&metrics.vm_ram_utilization_stats).into(),
        },
        summary,
    };

    let serialized_json = serde_json::to_string_pretty(&metrics)?;
    metrics_file.write_all(serialized_json.as_bytes())?;
    Ok(())
}
