use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum OrbitErrors {
    InvalidOrbitalElements(String),
    InvalidGravitationalParameter(f64),
    InvalidSolverConfig(String),
    IoError(io::Error),
    JsonError(serde_json::Error),
    CsvError(csv::Error),
}

impl fmt::Display for OrbitErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitErrors::InvalidOrbitalElements(reason) => {
                write!(f, "Invalid orbital elements: {}", reason)
            }
            OrbitErrors::InvalidGravitationalParameter(mu) => {
                write!(f, "Invalid gravitational parameter: {} (must be finite and > 0)", mu)
            }
            OrbitErrors::InvalidSolverConfig(reason) => {
                write!(f, "Invalid Kepler solver configuration: {}", reason)
            }
            OrbitErrors::IoError(e) => write!(f, "I/O error: {}", e),
            OrbitErrors::JsonError(e) => write!(f, "JSON error: {}", e),
            OrbitErrors::CsvError(e) => write!(f, "CSV writing error: {}", e),
        }
    }
}

impl Error for OrbitErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OrbitErrors::IoError(e) => Some(e),
            OrbitErrors::JsonError(e) => Some(e),
            OrbitErrors::CsvError(e) => Some(e),
            _ => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for OrbitErrors {
    fn from(err: io::Error) -> Self {
        OrbitErrors::IoError(err)
    }
}

impl From<serde_json::Error> for OrbitErrors {
    fn from(err: serde_json::Error) -> Self {
        OrbitErrors::JsonError(err)
    }
}

impl From<csv::Error> for OrbitErrors {
    fn from(err: csv::Error) -> Self {
        OrbitErrors::CsvError(err)
    }
}
