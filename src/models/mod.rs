pub mod elements;
pub mod state;

pub use elements::{normalized_angle, GravitationalParameter, OrbitalElements};
pub use state::{StateVector, Trajectory};
