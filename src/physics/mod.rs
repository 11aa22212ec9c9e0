pub mod orbital;
pub mod sampler;
