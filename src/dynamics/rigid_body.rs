use nalgebra::Vector3;

use crate::error::StepError;
use crate::physics::rotation::{body_to_inertial, euler_rate_transform};
use crate::physics::ControlForces;
use crate::vehicle::Airframe;

use super::state::State;

/// |cos θ| below this is treated as gimbal lock.
const SINGULARITY_EPS: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Newton-Euler rigid body, explicit Euler integration
// ---------------------------------------------------------------------------

/// Exclusive owner of the vehicle state. Advances it one fixed step per call;
/// nothing else mutates the state.
///
/// Integration is first-order explicit Euler, velocity before position and
/// body rates before Euler angles. No substepping, no stability safeguard:
/// a large dt degrades accuracy and eventually diverges. Callers own the
/// step size.
#[derive(Debug, Clone)]
pub struct RigidBody {
    state: State,
}

impl RigidBody {
    /// Body at rest at the origin.
    pub fn new() -> Self {
        RigidBody { state: State::at_rest() }
    }

    pub fn from_state(state: State) -> Self {
        RigidBody { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn into_state(self) -> State {
        self.state
    }

    /// Advance one step under the given thrust/moment channels.
    ///
    /// Fails with `SingularAttitude` when pitch is at ±90°, where the
    /// body-rate to Euler-rate transform divides by cos θ.
    pub fn advance(
        &mut self,
        forces: &ControlForces,
        airframe: &Airframe,
        dt: f64,
    ) -> Result<&State, StepError> {
        let (roll, pitch, yaw) = (self.state.roll(), self.state.pitch(), self.state.yaw());

        if pitch.cos().abs() <= SINGULARITY_EPS {
            return Err(StepError::SingularAttitude { pitch });
        }

        let rot = body_to_inertial(roll, pitch, yaw);
        let rate_transform = euler_rate_transform(roll, pitch);

        // Translational: thrust along body z, rotated inertial, plus weight.
        let thrust_body = Vector3::new(0.0, 0.0, forces.thrust);
        let weight = Vector3::new(0.0, 0.0, -airframe.mass * airframe.gravity);
        let accel = (rot * thrust_body + weight) / airframe.mass;

        self.state.vel += accel * dt;
        self.state.pos += self.state.vel * dt;

        // Rotational: Euler's equations with the gyroscopic coupling terms.
        let (ixx, iyy, izz) = (airframe.ixx(), airframe.iyy(), airframe.izz());
        let (p, q, r) = (self.state.rates.x, self.state.rates.y, self.state.rates.z);
        let rate_dot = Vector3::new(
            forces.roll_moment / ixx - q * r * (izz - iyy) / ixx,
            forces.pitch_moment / iyy - p * r * (ixx - izz) / iyy,
            forces.yaw_moment / izz - p * q * (iyy - ixx) / izz,
        );

        self.state.rates += rate_dot * dt;
        self.state.att += rate_transform * self.state.rates * dt;
        self.state.time += dt;

        Ok(&self.state)
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::Airframe;
    use approx::assert_relative_eq;

    fn airframe() -> Airframe {
        Airframe::builder().build().unwrap()
    }

    #[test]
    fn hover_thrust_is_a_fixed_point() {
        let af = airframe();
        let mut body = RigidBody::new();
        let forces = ControlForces {
            thrust: af.mass * af.gravity,
            ..Default::default()
        };
        let state = body.advance(&forces, &af, 0.1).unwrap().clone();
        assert_eq!(state.pos, Vector3::zeros());
        assert_eq!(state.vel, Vector3::zeros());
        assert_eq!(state.att, Vector3::zeros());
        assert_eq!(state.rates, Vector3::zeros());
        assert_relative_eq!(state.time, 0.1);
    }

    #[test]
    fn free_fall_accelerates_downward() {
        let af = airframe();
        let mut body = RigidBody::new();
        let dt = 0.01;
        body.advance(&ControlForces::default(), &af, dt).unwrap();
        let s = body.state();
        assert_relative_eq!(s.vel.z, -af.gravity * dt, epsilon = 1e-12);
        // Position uses the already-updated velocity.
        assert_relative_eq!(s.pos.z, -af.gravity * dt * dt, epsilon = 1e-12);
    }

    #[test]
    fn pitch_moment_spins_and_tilts() {
        let af = airframe();
        let mut body = RigidBody::new();
        let forces = ControlForces {
            thrust: af.mass * af.gravity,
            pitch_moment: 1e-3,
            ..Default::default()
        };
        body.advance(&forces, &af, 0.1).unwrap();
        body.advance(&forces, &af, 0.1).unwrap();
        let s = body.state();
        assert!(s.rates.y > 0.0, "positive pitch moment must raise q");
        assert!(s.pitch() > 0.0, "q must integrate into pitch");
    }

    #[test]
    fn gyroscopic_coupling_with_izz_twice_ixx() {
        let af = airframe();
        let mut body = RigidBody::from_state(State {
            rates: Vector3::new(0.0, 0.3, 0.2),
            ..State::at_rest()
        });
        let forces = ControlForces {
            thrust: af.mass * af.gravity,
            ..Default::default()
        };
        let dt = 0.01;
        body.advance(&forces, &af, dt).unwrap();
        // ṗ = −q·r·(Izz − Iyy)/Ixx = −q·r for this inertia family.
        assert_relative_eq!(body.state().rates.x, -0.3 * 0.2 * dt, epsilon = 1e-12);
    }

    #[test]
    fn vertical_pitch_is_rejected() {
        let af = airframe();
        let mut body = RigidBody::from_state(State {
            att: Vector3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0),
            ..State::at_rest()
        });
        let err = body.advance(&ControlForces::default(), &af, 0.1).unwrap_err();
        assert!(matches!(err, StepError::SingularAttitude { .. }));
    }
}
