use crate::errors::OrbitErrors;
use crate::models::OrbitalElements;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Flat SMA/INC/ECC/LAN/AOP/MA record exchanged with the viewer.
/// Angles are in degrees.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub SMA: f64,
    pub INC: f64,
    pub ECC: f64,
    pub LAN: f64,
    pub AOP: f64,
    pub MA: f64,
}

impl Default for ParameterSet {
    /// Earth at J2000 in the viewer's units
    fn default() -> Self {
        ParameterSet {
            SMA: 1.0,
            INC: 0.00005,
            ECC: 0.01671022,
            LAN: 348.73936,
            AOP: 102.94719,
            MA: -351.2222,
        }
    }
}

impl ParameterSet {
    pub fn load(path: &Path) -> Result<Self, OrbitErrors> {
        let text = fs::read_to_string(path)?;
        let params: ParameterSet = serde_json::from_str(&text)?;
        info!(path = %path.display(), ?params, "loaded parameter set");
        Ok(params)
    }

    pub fn save(&self, path: &Path) -> Result<(), OrbitErrors> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string(self)?)?;
        info!(path = %path.display(), "exported parameter set");
        Ok(())
    }

    pub fn to_elements(&self) -> Result<OrbitalElements, OrbitErrors> {
        OrbitalElements::from_degrees(self.SMA, self.INC, self.ECC, self.LAN, self.AOP, self.MA)
    }

    pub fn from_elements(elements: &OrbitalElements) -> Self {
        ParameterSet {
            SMA: elements.semi_major_axis(),
            INC: elements.inclination().to_degrees(),
            ECC: elements.eccentricity(),
            LAN: elements.ascending_node().to_degrees(),
            AOP: elements.periapsis_argument().to_degrees(),
            MA: elements.mean_anomaly().to_degrees(),
        }
    }
}
