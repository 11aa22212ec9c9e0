pub mod cli;
pub mod parameter_set;

pub use cli::CliArgs;
pub use parameter_set::ParameterSet;
