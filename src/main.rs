use clap::Parser;
use orbit_viewer::config::{CliArgs, ParameterSet};
use orbit_viewer::export::write_trajectory_file;
use orbit_viewer::physics::orbital::OrbitalMechanics;
use orbit_viewer::physics::sampler::sample_period;
use orbit_viewer::GravitationalParameter;
use std::error::Error;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(level: &str) {
    // RUST_LOG wins over --log-level
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_level(true))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    let params = match &args.params {
        Some(path) => ParameterSet::load(path)?,
        None => ParameterSet::default(),
    };
    let elements = params.to_elements()?;
    let mu = GravitationalParameter::sun();
    let solver = args.solver()?;

    let period = OrbitalMechanics::orbital_period(elements.semi_major_axis(), mu);
    info!(?params, period, samples = args.samples, "computing trajectory");

    let trajectory = sample_period(&elements, mu, args.samples, &solver);
    write_trajectory_file(&trajectory, &args.output)?;

    if let Some((centre, half_width)) = trajectory.bounding_cube() {
        info!(
            centre = ?(centre.x, centre.y, centre.z),
            half_width,
            "equal-axis plot extent"
        );
    }

    if let Some(path) = &args.export {
        params.save(path)?;
    }

    println!(
        "Trajectory with {} samples has been written to {}",
        trajectory.len(),
        args.output.display()
    );
    Ok(())
}
