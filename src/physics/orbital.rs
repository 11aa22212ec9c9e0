use crate::constants::TWO_PI;
use crate::models::{GravitationalParameter, OrbitalElements, StateVector};
use crate::numerics::kepler::KeplerSolver;
use crate::numerics::rotation::perifocal_to_inertial;
use nalgebra as na;

pub struct OrbitalMechanics;

/// Steps 1-5 of the element to state transform, before rotating out of the
/// orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerifocalState {
    pub position: na::Vector3<f64>, // (X, Y, 0)
    pub velocity: na::Vector3<f64>, // (Xdot, Ydot, 0)
    pub mean_anomaly: f64,
    pub eccentric_anomaly: f64,
}

#[allow(non_snake_case)]
impl OrbitalMechanics {
    /// n = sqrt(mu / a^3)
    pub fn mean_motion(a: f64, mu: GravitationalParameter) -> f64 {
        (mu.value() / a.powi(3)).sqrt()
    }

    /// T = 2*pi / n
    pub fn orbital_period(a: f64, mu: GravitationalParameter) -> f64 {
        TWO_PI * (a.powi(3) / mu.value()).sqrt()
    }

    /// Angular rate 2*pi / T of the mean anomaly.
    pub fn angular_rate(a: f64, mu: GravitationalParameter) -> f64 {
        TWO_PI / Self::orbital_period(a, mu)
    }

    /// Position and velocity in the orbital plane at time `t` since epoch.
    /// Mean anomaly is propagated linearly and never wrapped.
    pub fn perifocal_state(
        elements: &OrbitalElements,
        mu: GravitationalParameter,
        t: f64,
        solver: &KeplerSolver,
    ) -> PerifocalState {
        let a = elements.semi_major_axis();
        let e = elements.eccentricity();

        let n = Self::mean_motion(a, mu);
        let M = elements.mean_anomaly() + n * t;
        let E = solver.solve(M, e);

        let (sin_E, cos_E) = E.sin_cos();
        let b_over_a = (1.0 - e * e).sqrt();

        // Position in orbital plane
        let X = a * (cos_E - e);
        let Y = a * b_over_a * sin_E;

        // Velocity in orbital plane, dE/dt = n / (1 - e cos E)
        let rate = n * a * a / (a * (1.0 - e * cos_E));
        let X_dot = -rate * sin_E;
        let Y_dot = rate * b_over_a * cos_E;

        PerifocalState {
            position: na::Vector3::new(X, Y, 0.0),
            velocity: na::Vector3::new(X_dot, Y_dot, 0.0),
            mean_anomaly: M,
            eccentric_anomaly: E,
        }
    }

    /// Converts Keplerian elements to the inertial state vector at time `t`
    /// using the fixed five-step Newton solver.
    ///
    /// `t` must be finite. It is not validated: a NaN or infinite time gives
    /// an all-NaN state.
    pub fn elements_to_state(
        elements: &OrbitalElements,
        mu: GravitationalParameter,
        t: f64,
    ) -> StateVector {
        Self::elements_to_state_with(elements, mu, t, &KeplerSolver::default())
    }

    pub fn elements_to_state_with(
        elements: &OrbitalElements,
        mu: GravitationalParameter,
        t: f64,
        solver: &KeplerSolver,
    ) -> StateVector {
        let perifocal = Self::perifocal_state(elements, mu, t, solver);

        let transform = perifocal_to_inertial(
            elements.ascending_node(),
            elements.inclination(),
            elements.periapsis_argument(),
        );

        StateVector::new(
            transform * perifocal.position,
            transform * perifocal.velocity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{G_SUN_UNITS, PI};
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn sun() -> GravitationalParameter {
        GravitationalParameter::sun()
    }

    #[test_case(1.0, 365.31135010074786; "one au")]
    #[test_case(1.523679, 365.31135010074786 * 1.523679_f64.powf(1.5); "mars distance")]
    fn orbital_period(a: f64, expected: f64) {
        let period = OrbitalMechanics::orbital_period(a, sun());
        assert_abs_diff_eq!(period, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(
            period,
            2.0 * PI / OrbitalMechanics::mean_motion(a, sun()),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            OrbitalMechanics::angular_rate(a, sun()),
            OrbitalMechanics::mean_motion(a, sun()),
            epsilon = 1e-15
        );
    }

    #[test]
    fn mean_motion_at_one_au_is_sqrt_g() {
        assert_abs_diff_eq!(
            OrbitalMechanics::mean_motion(1.0, sun()),
            G_SUN_UNITS.sqrt(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn perifocal_radius_follows_eccentric_anomaly() {
        let elements = OrbitalElements::new(2.0, 0.0, 0.4, 0.0, 0.0, 0.7).unwrap();
        let state = OrbitalMechanics::perifocal_state(&elements, sun(), 10.0, &KeplerSolver::default());
        let r = 2.0 * (1.0 - 0.4 * state.eccentric_anomaly.cos());
        assert_abs_diff_eq!(state.position.magnitude(), r, epsilon = 1e-12);
        assert_eq!(state.position.z, 0.0);
        assert_eq!(state.velocity.z, 0.0);
    }

    #[test]
    fn mean_anomaly_is_not_wrapped() {
        let elements = OrbitalElements::new(1.0, 0.0, 0.1, 0.0, 0.0, 0.0).unwrap();
        let t = 10.0 * OrbitalMechanics::orbital_period(1.0, sun());
        let state = OrbitalMechanics::perifocal_state(&elements, sun(), t, &KeplerSolver::default());
        assert_abs_diff_eq!(state.mean_anomaly, 20.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn vis_viva_holds_along_orbit() {
        let elements = OrbitalElements::from_degrees(1.3, 25.0, 0.3, 40.0, 70.0, 10.0).unwrap();
        let mu = sun().value();
        for k in 0..12 {
            let state = OrbitalMechanics::elements_to_state(&elements, sun(), k as f64 * 30.0);
            let v2 = state.speed().powi(2);
            assert_abs_diff_eq!(v2, mu * (2.0 / state.radius() - 1.0 / 1.3), epsilon = 1e-9);
        }
    }

    #[test]
    fn identity_rotation_keeps_perifocal_coordinates() {
        let elements = OrbitalElements::new(1.0, 0.0, 0.2, 0.0, 0.0, 1.0).unwrap();
        let solver = KeplerSolver::default();
        let perifocal = OrbitalMechanics::perifocal_state(&elements, sun(), 5.0, &solver);
        let state = OrbitalMechanics::elements_to_state_with(&elements, sun(), 5.0, &solver);
        assert_abs_diff_eq!(state.position, perifocal.position, epsilon = 1e-15);
        assert_abs_diff_eq!(state.velocity, perifocal.velocity, epsilon = 1e-15);
    }

    #[test]
    fn angular_momentum_points_along_orbit_normal() {
        let (node, inc) = (1.2, 0.5);
        let elements = OrbitalElements::new(1.0, inc, 0.1, node, 0.3, 0.0).unwrap();
        let state = OrbitalMechanics::elements_to_state(&elements, sun(), 0.0);
        let h = state.position.cross(&state.velocity).normalize();
        let normal = na::Vector3::new(inc.sin() * node.sin(), -inc.sin() * node.cos(), inc.cos());
        assert_abs_diff_eq!(h, normal, epsilon = 1e-12);
    }
}
