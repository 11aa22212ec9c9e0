use crate::constants::{NEWTON_ITERATIONS, NEWTON_STEP};
use crate::errors::OrbitErrors;
use tracing::{trace, warn};

/// f(E) = E - e*sin(E) - M. Zero at the eccentric anomaly.
#[allow(non_snake_case)]
pub fn kepler_residual(E: f64, e: f64, M: f64) -> f64 {
    E - e * E.sin() - M
}

/// Newton-Raphson solver for Kepler's equation `E - e*sin(E) = M`.
///
/// The slope is estimated with a forward difference of width `step` and the
/// iteration starts from `E0 = M`. With the default configuration the solver
/// always runs exactly `iterations` steps and never checks the residual: the
/// cost per call is fixed and a poorly converged `E` is returned silently.
///
/// Setting `tolerance` stops the iteration as soon as `|f(E)| <= tolerance`
/// and logs a warning when the cap is hit first. The returned `E` then agrees
/// with the fixed-iteration result only to within that tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    iterations: usize,
    step: f64,
    tolerance: Option<f64>,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver {
            iterations: NEWTON_ITERATIONS,
            step: NEWTON_STEP,
            tolerance: None,
        }
    }
}

#[allow(non_snake_case)]
impl KeplerSolver {
    /// Rejects a step that is not finite and > 0, and a tolerance that is
    /// not finite and >= 0. Zero iterations is allowed and returns `E0 = M`.
    pub fn new(iterations: usize, step: f64, tolerance: Option<f64>) -> Result<Self, OrbitErrors> {
        if !step.is_finite() || step <= 0.0 {
            return Err(OrbitErrors::InvalidSolverConfig(format!(
                "step {} must be finite and > 0",
                step
            )));
        }
        if let Some(tolerance) = tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(OrbitErrors::InvalidSolverConfig(format!(
                    "tolerance {} must be finite and >= 0",
                    tolerance
                )));
            }
        }

        Ok(KeplerSolver {
            iterations,
            step,
            tolerance,
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }

    /// Returns the eccentric anomaly for mean anomaly `M` and eccentricity `e`.
    /// `M` is used as given, no wrap into [0, 2*pi).
    pub fn solve(&self, M: f64, e: f64) -> f64 {
        let h = self.step;
        let mut E = M;

        for iteration in 0..self.iterations {
            let f = kepler_residual(E, e, M);
            if let Some(tolerance) = self.tolerance {
                if f.abs() <= tolerance {
                    trace!(iteration, residual = f, "kepler solver converged");
                    return E;
                }
            }

            let slope = (kepler_residual(E + h, e, M) - f) / h;
            E -= f / slope;
        }

        let residual = kepler_residual(E, e, M);
        if let Some(tolerance) = self.tolerance {
            if residual.abs() > tolerance {
                warn!(
                    mean_anomaly = M,
                    eccentricity = e,
                    residual,
                    iterations = self.iterations,
                    "kepler solver hit iteration cap before reaching tolerance"
                );
            }
        }
        trace!(mean_anomaly = M, eccentric_anomaly = E, residual, "kepler solve");
        E
    }
}
