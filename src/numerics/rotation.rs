use nalgebra as na;

/// Frame rotation about the first axis by `theta` (passive convention).
pub fn rotation1(theta: f64) -> na::Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    na::Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Frame rotation about the third axis by `theta` (passive convention).
pub fn rotation3(theta: f64) -> na::Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    na::Matrix3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Maps perifocal-frame vectors into the inertial frame:
/// R3(-Omega) * R1(-i) * R3(-omega), the 3-1-3 Euler sequence.
pub fn perifocal_to_inertial(
    ascending_node: f64,
    inclination: f64,
    periapsis_argument: f64,
) -> na::Matrix3<f64> {
    rotation3(-ascending_node) * rotation1(-inclination) * rotation3(-periapsis_argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test]
    fn zero_angles_give_identity() {
        assert_abs_diff_eq!(
            perifocal_to_inertial(0.0, 0.0, 0.0),
            na::Matrix3::identity(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn rotation3_turns_frame_not_vector() {
        // Rotating the frame by +90 deg makes the old x axis read as -y
        let v = rotation3(PI / 2.0) * na::Vector3::x();
        assert_abs_diff_eq!(v, na::Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-15);
        let v = rotation1(PI / 2.0) * na::Vector3::y();
        assert_abs_diff_eq!(v, na::Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-15);
    }

    #[test_case(0.3, 0.2, 1.1; "small angles")]
    #[test_case(348.73936_f64.to_radians(), 0.00005_f64.to_radians(), 102.94719_f64.to_radians(); "earth-like")]
    #[test_case(-2.0, 3.0, 7.5; "angles outside one turn")]
    fn matches_active_euler_sequence(node: f64, inc: f64, arg: f64) {
        let expected = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), node)
            * na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), inc)
            * na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), arg);
        assert_abs_diff_eq!(
            perifocal_to_inertial(node, inc, arg),
            *expected.matrix(),
            epsilon = 1e-12
        );
    }

    #[test_case(0.3, 0.2, 1.1; "small angles")]
    #[test_case(5.0, 2.9, -4.0; "large angles")]
    fn composition_is_orthogonal(node: f64, inc: f64, arg: f64) {
        let r = perifocal_to_inertial(node, inc, arg);
        assert_abs_diff_eq!(r * r.transpose(), na::Matrix3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    }
}
