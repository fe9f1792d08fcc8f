//! CLI Adapter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "hardway-ign")]
#[command(version)]
#[command(
    about = "Assemble per-node ignition configs for a six-node Kubernetes cluster",
    long_about = "Assemble per-node ignition configs for a six-node Kubernetes cluster.\n\n\
Reads CLUSTER_DOMAIN, BOOTSTRAP, MASTER0, MASTER1, MASTER2, WORKER0, WORKER1 and \
SSH_PUB_KEY from the environment, collects templates from config/ and generated \
material from generated/, and writes generated/ignition/<node>.ign. Set HARDWAY_ROOT \
to build from a directory other than the current one."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    init_tracing();

    let result: Result<(), AppError> = crate::generate().map(|report| {
        println!("Ignition configs written to {}", report.output_dir.display());
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
