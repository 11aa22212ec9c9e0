use crate::models::{GravitationalParameter, OrbitalElements, Trajectory};
use crate::numerics::kepler::KeplerSolver;
use crate::physics::orbital::OrbitalMechanics;
use tracing::debug;

/// `count` evenly spaced values from `start` to `stop`, both ends included.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|k| start + k as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Evaluates the orbit at every time in `times`, preserving their order.
///
/// Times must be finite. A non-finite time still produces its entry, an
/// all-NaN state, so the result always has one state per input time; the
/// other samples are unaffected.
pub fn sample(
    elements: &OrbitalElements,
    mu: GravitationalParameter,
    times: &[f64],
) -> Trajectory {
    sample_with(elements, mu, times, &KeplerSolver::default())
}

pub fn sample_with(
    elements: &OrbitalElements,
    mu: GravitationalParameter,
    times: &[f64],
    solver: &KeplerSolver,
) -> Trajectory {
    debug!(samples = times.len(), ?solver, "sampling trajectory");

    let mut trajectory = Trajectory::with_capacity(times.len());
    for &t in times {
        let state = OrbitalMechanics::elements_to_state_with(elements, mu, t, solver);
        trajectory.push(t, state);
    }
    trajectory
}

/// Samples one full orbital period, [0, T], with `count` points.
pub fn sample_period(
    elements: &OrbitalElements,
    mu: GravitationalParameter,
    count: usize,
    solver: &KeplerSolver,
) -> Trajectory {
    let period = OrbitalMechanics::orbital_period(elements.semi_major_axis(), mu);
    debug!(period, count, "sampling one orbital period");
    sample_with(elements, mu, &linspace(0.0, period, count), solver)
}
