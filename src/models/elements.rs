use crate::constants::{MU_SUN, TWO_PI};
use crate::errors::OrbitErrors;

/// Classical elements of an elliptical orbit at epoch t = 0.
///
/// Angles are held in radians. Construction validates the elliptical domain
/// (`a > 0`, `0 <= e < 1`, finite angles), so every value of this type can be
/// fed to the transform without producing NaNs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    inclination: f64,
    eccentricity: f64,
    ascending_node: f64,
    periapsis_argument: f64,
    mean_anomaly: f64,
}

impl OrbitalElements {
    /// Builds the elements from radians.
    /// Arguments follow the parameter-set order: a, i, e, Omega, omega, M0
    pub fn new(
        semi_major_axis: f64,
        inclination: f64,
        eccentricity: f64,
        ascending_node: f64,
        periapsis_argument: f64,
        mean_anomaly: f64,
    ) -> Result<Self, OrbitErrors> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(OrbitErrors::InvalidOrbitalElements(format!(
                "semi-major axis {} must be finite and > 0",
                semi_major_axis
            )));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitErrors::InvalidOrbitalElements(format!(
                "eccentricity {} outside [0, 1)",
                eccentricity
            )));
        }
        for (name, angle) in [
            ("inclination", inclination),
            ("longitude of ascending node", ascending_node),
            ("argument of periapsis", periapsis_argument),
            ("mean anomaly", mean_anomaly),
        ] {
            if !angle.is_finite() {
                return Err(OrbitErrors::InvalidOrbitalElements(format!(
                    "{} {} is not finite",
                    name, angle
                )));
            }
        }

        Ok(OrbitalElements {
            semi_major_axis,
            inclination,
            eccentricity,
            ascending_node,
            periapsis_argument,
            mean_anomaly,
        })
    }

    /// Same as [`OrbitalElements::new`] with every angle given in degrees.
    pub fn from_degrees(
        semi_major_axis: f64,
        inclination_deg: f64,
        eccentricity: f64,
        ascending_node_deg: f64,
        periapsis_argument_deg: f64,
        mean_anomaly_deg: f64,
    ) -> Result<Self, OrbitErrors> {
        Self::new(
            semi_major_axis,
            inclination_deg.to_radians(),
            eccentricity,
            ascending_node_deg.to_radians(),
            periapsis_argument_deg.to_radians(),
            mean_anomaly_deg.to_radians(),
        )
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn ascending_node(&self) -> f64 {
        self.ascending_node
    }

    pub fn periapsis_argument(&self) -> f64 {
        self.periapsis_argument
    }

    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }
}

/// mu = G * M of the central body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitationalParameter(f64);

impl GravitationalParameter {
    pub fn new(mu: f64) -> Result<Self, OrbitErrors> {
        if !mu.is_finite() || mu <= 0.0 {
            return Err(OrbitErrors::InvalidGravitationalParameter(mu));
        }
        Ok(GravitationalParameter(mu))
    }

    pub fn from_mass(g: f64, central_mass: f64) -> Result<Self, OrbitErrors> {
        Self::new(g * central_mass)
    }

    /// Heliocentric value in the viewer's AU / solar mass / day units.
    pub fn sun() -> Self {
        GravitationalParameter(MU_SUN)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for GravitationalParameter {
    fn default() -> Self {
        Self::sun()
    }
}

/// Wraps an angle into [0, 2*pi).
pub fn normalized_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2*pi for tiny negative inputs
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}
