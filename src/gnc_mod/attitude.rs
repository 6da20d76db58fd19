use crate::dynamics::state::{RotorCommand, State};
use crate::vehicle::{Airframe, ControlGains};

use super::position::{AttitudeCommand, Setpoint};

// ---------------------------------------------------------------------------
// Inner loop: attitude/rate error → four rotor speed commands
// ---------------------------------------------------------------------------

/// PD attitude control plus rotor mixing.
///
/// Three differential corrections (pitch, roll, yaw) ride on the collective
/// baseline ω_hover + thrust_trim. Outputs are not clamped; saturation
/// artifacts propagate as ordinary values.
pub fn attitude_loop(
    cmd: &AttitudeCommand,
    setpoint: &Setpoint,
    state: &State,
    airframe: &Airframe,
    gains: &ControlGains,
) -> RotorCommand {
    let d_pitch = gains
        .pitch
        .output(cmd.pitch - state.pitch(), cmd.pitch_rate - state.rates.y);
    let d_roll = gains
        .roll
        .output(cmd.roll - state.roll(), cmd.roll_rate - state.rates.x);
    let d_yaw = gains
        .yaw
        .output(setpoint.yaw - state.yaw(), setpoint.yaw_rate - state.rates.z);

    let total = airframe.hover_speed() + cmd.thrust_trim;
    mix(total, d_pitch, d_roll, d_yaw)
}

/// Fixed "+"-configuration mixing:
/// ω1 = total − Δpitch + Δyaw, ω2 = total + Δroll − Δyaw,
/// ω3 = total + Δpitch + Δyaw, ω4 = total − Δroll − Δyaw.
pub fn mix(total: f64, d_pitch: f64, d_roll: f64, d_yaw: f64) -> RotorCommand {
    RotorCommand {
        speeds: [
            total - d_pitch + d_yaw,
            total + d_roll - d_yaw,
            total + d_pitch + d_yaw,
            total - d_roll - d_yaw,
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
