pub mod config;
pub mod constants;
pub mod errors;
pub mod export;
pub mod models;
pub mod numerics;
pub mod physics;

pub use errors::OrbitErrors;
pub use models::{GravitationalParameter, OrbitalElements, StateVector, Trajectory};
pub use numerics::kepler::KeplerSolver;
pub use physics::orbital::OrbitalMechanics;
pub use physics::sampler::{linspace, sample, sample_period, sample_with};
