use nalgebra::Vector3;

use crate::dynamics::state::State;
use crate::vehicle::{Airframe, ControlGains};

// ---------------------------------------------------------------------------
// Outer loop: position/velocity error → desired attitude + thrust trim
// ---------------------------------------------------------------------------

/// Desired trajectory point fed to the controller each tick.
#[derive(Debug, Clone, Copy)]
pub struct Setpoint {
    pub pos: Vector3<f64>, // m, inertial
    pub vel: Vector3<f64>, // m/s, inertial
    pub yaw: f64,          // rad, ψ_des
    pub yaw_rate: f64,     // rad/s, r_des
}

impl Setpoint {
    /// Hold a fixed point at zero velocity.
    pub fn hold(x: f64, y: f64, altitude: f64) -> Self {
        Setpoint {
            pos: Vector3::new(x, y, altitude),
            vel: Vector3::zeros(),
            yaw: 0.0,
            yaw_rate: 0.0,
        }
    }
}

/// Output of the position loop, input to the attitude loop.
#[derive(Debug, Clone, Copy)]
pub struct AttitudeCommand {
    pub roll: f64,        // rad, φ_des
    pub pitch: f64,       // rad, θ_des
    pub roll_rate: f64,   // rad/s, p_des
    pub pitch_rate: f64,  // rad/s, q_des
    pub thrust_trim: f64, // rad/s, rotor-speed correction about hover
}

/// PD position control, linearized about hover.
///
/// Horizontal acceleration corrections rotate through ψ_des into desired
/// roll/pitch via the small-angle relation; the vertical correction becomes
/// a rotor-speed trim about the hover baseline. Desired body rates are the
/// finite difference of desired vs. current attitude over one step — a
/// first-order approximation carried over from the control design, not a
/// true trajectory derivative.
pub fn position_loop(
    setpoint: &Setpoint,
    state: &State,
    airframe: &Airframe,
    gains: &ControlGains,
    dt: f64,
) -> AttitudeCommand {
    let err = setpoint.pos - state.pos;
    let rate_err = setpoint.vel - state.vel;

    let accel_x = gains.x.output(err.x, rate_err.x);
    let accel_y = gains.y.output(err.y, rate_err.y);
    let accel_z = gains.z.output(err.z, rate_err.z);

    let (sin_psi, cos_psi) = setpoint.yaw.sin_cos();
    let g = airframe.gravity;
    let roll = (accel_x * sin_psi - accel_y * cos_psi) / g;
    let pitch = (accel_x * cos_psi + accel_y * sin_psi) / g;

    let thrust_trim =
        airframe.mass * accel_z / (8.0 * airframe.k_thrust * airframe.hover_speed());

    AttitudeCommand {
        roll,
        pitch,
        roll_rate: (roll - state.roll()) / dt,
        pitch_rate: (pitch - state.pitch()) / dt,
        thrust_trim,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
