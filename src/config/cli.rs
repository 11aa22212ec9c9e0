//! Command-line arguments for the headless trajectory exporter.

use crate::constants::{DEFAULT_SAMPLE_COUNT, NEWTON_ITERATIONS, NEWTON_STEP};
use crate::errors::OrbitErrors;
use crate::numerics::kepler::KeplerSolver;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orbit-viewer",
    about = "Samples one orbital period from six Keplerian elements"
)]
pub struct CliArgs {
    /// JSON parameter set (SMA, INC, ECC, LAN, AOP, MA). Defaults to Earth.
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Number of samples over one orbital period.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// CSV file receiving the sampled state vectors.
    #[arg(long, default_value = "output/trajectory.csv")]
    pub output: PathBuf,

    /// Also write the parameter set in use to this JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Newton iterations for Kepler's equation.
    #[arg(long, default_value_t = NEWTON_ITERATIONS)]
    pub iterations: usize,

    /// Forward-difference step for the Newton slope (rad).
    #[arg(long, default_value_t = NEWTON_STEP)]
    pub step: f64,

    /// Stop iterating once |E - e sin E - M| falls below this value.
    #[arg(long)]
    pub tolerance: Option<f64>,
}

impl CliArgs {
    pub fn solver(&self) -> Result<KeplerSolver, OrbitErrors> {
        KeplerSolver::new(self.iterations, self.step, self.tolerance)
    }
}
