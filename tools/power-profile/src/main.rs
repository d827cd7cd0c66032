use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::{error, info};
use serde::Serialize;

use dslab_power_profile::dynamic::DynamicPower;
use dslab_power_profile::profile::PowerProfile;
use dslab_power_profile::schedule::Schedule;
use dslab_power_profile::system::{Application, Platform};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Variable time step following the moments of power switches
    Partition,
    /// Fixed sampling interval
    Sample,
}

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Computes dynamic power profile of a scheduled application
struct Args {
    /// Path to YAML file with platform cores
    #[arg(short, long)]
    platform: PathBuf,

    /// Path to YAML file with application tasks
    #[arg(short, long)]
    application: PathBuf,

    /// Path to YAML file with schedule
    #[arg(short, long)]
    schedule: PathBuf,

    /// Profile type
    #[arg(short, long, value_enum, default_value_t = Mode::Partition)]
    mode: Mode,

    /// Tolerance for merging close time moments (partition mode)
    #[arg(long, default_value_t = 1e-9)]
    eps: f64,

    /// Sampling interval (sample mode)
    #[arg(long, default_value_t = 1e-3)]
    dt: f64,

    /// Number of samples (sample mode, default - cover the whole schedule span)
    #[arg(long)]
    samples: Option<usize>,

    /// Path to produced JSON file with the profile (default - print to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Output {
    cores: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dt: Option<f64>,
    power: Vec<Vec<f64>>,
}

fn rows(profile: &PowerProfile) -> Vec<Vec<f64>> {
    profile.rows().map(|row| row.to_vec()).collect()
}

fn main() -> std::io::Result<()> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();

    let model = DynamicPower::new(
        Platform::from_yaml(args.platform.to_str().unwrap()),
        Application::from_yaml(args.application.to_str().unwrap()),
    );
    let schedule = Schedule::from_yaml(args.schedule.to_str().unwrap());
    if let Err(e) = model.validate(&schedule) {
        error!("Invalid input: {}", e);
        std::process::exit(1);
    }
    if schedule.tasks == 0 {
        error!("Schedule has no tasks");
        std::process::exit(1);
    }
    if args.eps < 0. || args.dt <= 0. {
        error!("Tolerance should be non-negative and sampling interval should be positive");
        std::process::exit(1);
    }

    let output = match args.mode {
        Mode::Partition => {
            let partition = model.partition(&schedule, &[], args.eps);
            info!("Built profile with {} variable steps", partition.steps.len());
            Output {
                cores: schedule.cores,
                power: rows(&partition.profile),
                steps: Some(partition.steps),
                dt: None,
            }
        }
        Mode::Sample => {
            let samples = args.samples.unwrap_or((schedule.span / args.dt) as usize);
            let profile = model.sample(&schedule, args.dt, samples);
            info!("Built profile with {} samples of {}", samples, args.dt);
            Output {
                cores: schedule.cores,
                steps: None,
                dt: Some(args.dt),
                power: rows(&profile),
            }
        }
    };

    let json = serde_json::to_string_pretty(&output).unwrap();
    match args.output {
        Some(path) => std::fs::File::create(path)?.write_all(json.as_bytes()),
        None => std::io::stdout().write_all(json.as_bytes()),
    }
}
