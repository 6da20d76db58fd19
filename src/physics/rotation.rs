use nalgebra::Matrix3;

// ---------------------------------------------------------------------------
// Euler-angle rotation kinematics (ZYX aerospace sequence)
// ---------------------------------------------------------------------------

/// Chained frame rotation R = R(φ)·R(θ)·R(ψ): inertial coordinates into
/// body coordinates, yaw applied first.
fn inertial_to_body(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let (sin_phi, cos_phi) = roll.sin_cos();
    let (sin_theta, cos_theta) = pitch.sin_cos();
    let (sin_psi, cos_psi) = yaw.sin_cos();

    let r_psi = Matrix3::new(
        cos_psi, sin_psi, 0.0,
        -sin_psi, cos_psi, 0.0,
        0.0, 0.0, 1.0,
    );
    let r_theta = Matrix3::new(
        cos_theta, 0.0, -sin_theta,
        0.0, 1.0, 0.0,
        sin_theta, 0.0, cos_theta,
    );
    let r_phi = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, cos_phi, sin_phi,
        0.0, -sin_phi, cos_phi,
    );

    r_phi * r_theta * r_psi
}

/// Rotation taking body-frame vectors to the inertial frame.
///
/// Orthonormal for any attitude; pure function of the three angles.
pub fn body_to_inertial(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    inertial_to_body(roll, pitch, yaw).transpose()
}

/// Kinematic transform from body angular rates (p, q, r) to Euler angle
/// rates (φ̇, θ̇, ψ̇).
///
/// Singular at pitch = ±90° (division by cos θ). Callers must reject that
/// attitude before applying the transform; see `RigidBody::advance`.
pub fn euler_rate_transform(roll: f64, pitch: f64) -> Matrix3<f64> {
    let (sin_phi, cos_phi) = roll.sin_cos();
    let cos_theta = pitch.cos();
    let tan_theta = pitch.tan();

    Matrix3::new(
        1.0, sin_phi * tan_theta, cos_phi * tan_theta,
        0.0, cos_phi, -sin_phi,
        0.0, sin_phi / cos_theta, cos_phi / cos_theta,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};

    #[test]
    fn identity_at_zero_attitude() {
        let r = body_to_inertial(0.0, 0.0, 0.0);
        assert_relative_eq!(r, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn orthonormal_over_attitude_grid() {
        for &roll in &[-1.2, -0.3, 0.0, 0.4, 1.5] {
            for &pitch in &[-1.0, -0.2, 0.0, 0.5, 1.3] {
                for &yaw in &[-3.0, 0.0, 0.7, 2.9] {
                    let r = body_to_inertial(roll, pitch, yaw);
                    assert_relative_eq!(
                        r.transpose() * r,
                        Matrix3::identity(),
                        epsilon = 1e-12
                    );
                    assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let a = body_to_inertial(0.3, -0.7, 1.9);
        let b = body_to_inertial(0.3, -0.7, 1.9);
        assert_eq!(a, b, "pure function must return identical bits");
    }

    #[test]
    fn yaw_rotates_body_x_in_horizontal_plane() {
        let yaw = 0.5_f64;
        let r = body_to_inertial(0.0, 0.0, yaw);
        let x_inertial = r * Vector3::x();
        assert_relative_eq!(x_inertial.x, yaw.cos(), epsilon = 1e-12);
        assert_relative_eq!(x_inertial.y, yaw.sin(), epsilon = 1e-12);
        assert_relative_eq!(x_inertial.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rate_transform_identity_at_level_attitude() {
        let t = euler_rate_transform(0.0, 0.0);
        assert_relative_eq!(t, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn rate_transform_couples_near_pitch() {
        // At nonzero pitch, yaw rate leaks into roll rate through tan θ.
        let t = euler_rate_transform(0.0, 0.4);
        assert!(t[(0, 2)].abs() > 1e-3, "expected tan θ coupling, got {}", t[(0, 2)]);
    }
}
