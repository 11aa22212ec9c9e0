pub mod kepler;
pub mod rotation;
