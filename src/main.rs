use std::env;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use file_rotate::{compression::Compression, suffix::AppendCount, ContentLimit, FileRotate};
use log::info;

use vm_allocation_simulator::config::SimulationConfig;
use vm_allocation_simulator::core::errors::SimulationError;
use vm_allocation_simulator::simulator::VmAllocationSimulation;

#[derive(Parser)]
struct Args {
    /// YAML config, the built-in reference config is used if omitted.
    #[clap(short, long)]
    config_file: Option<PathBuf>,
    /// Replay arrivals from a YAML or CSV trace instead of generating them.
    #[clap(short, long)]
    demand_trace_file: Option<PathBuf>,
    #[clap(long)]
    seed: Option<u64>,
    #[clap(long)]
    ticks: Option<u64>,
    #[clap(long)]
    max_vms: Option<u64>,
    #[clap(long)]
    vm_cpu: Option<u64>,
    #[clap(long)]
    vm_ram: Option<u64>,
}

impl Args {
    fn apply_overrides(&self, config: &mut SimulationConfig) {
        if let Some(path) = &self.demand_trace_file {
            config.demand_trace_path = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if let Some(max_vms) = self.max_vms {
            config.max_vms = max_vms;
        }
        if let Some(cpu) = self.vm_cpu {
            config.vm_capacity.cpu = cpu;
        }
        if let Some(ram) = self.vm_ram {
            config.vm_capacity.ram = ram;
        }
    }
}

fn init_logger(logs_filepath: Option<&str>) {
    // log level INFO by default
    let mut env_logger_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        env_logger_builder.filter_level(log::LevelFilter::Info);
    }
    if let Some(path) = logs_filepath {
        let log_file = FileRotate::new(
            path,
            AppendCount::new(5),
            ContentLimit::Bytes(64 * 1024 * 1024),
            Compression::None,
            #[cfg(unix)]
            None,
        );
        env_logger_builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    env_logger_builder.init();
}

fn main() -> Result<(), SimulationError> {
    let args = Args::parse();

    let mut config = match &args.config_file {
        Some(path) => serde_yaml::from_str::<SimulationConfig>(&std::fs::read_to_string(path)?)?,
        None => SimulationConfig::default(),
    };
    args.apply_overrides(&mut config);

    init_logger(config.logs_filepath.as_deref());
    match &args.config_file {
        Some(path) => info!("Path to config file: {:?}", path),
        None => info!("No config file given, using the reference config"),
    }

    let mut simulation = VmAllocationSimulation::new(Rc::new(config))?;
    simulation.run()?;
    Ok(())
}
