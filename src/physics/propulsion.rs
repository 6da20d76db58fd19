use crate::dynamics::state::RotorCommand;
use crate::vehicle::Airframe;

// ---------------------------------------------------------------------------
// Rotor propulsion model ("+" configuration)
// ---------------------------------------------------------------------------
//
// Rotor layout: 1 front (+x), 2 right (+y), 3 rear, 4 left. Rotors 1/3 spin
// opposite to 2/4, so reaction torques alternate sign around the frame.

/// Per-rotor thrust and reaction torque.
#[derive(Debug, Clone, Copy)]
pub struct RotorLoads {
    pub thrust: [f64; 4], // N, f_i = k_thrust · ω_i²
    pub torque: [f64; 4], // N·m, m_i = k_moment · ω_i²
}

/// Aggregate thrust and body-axis moment channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlForces {
    pub thrust: f64,       // u1, N, along body z
    pub roll_moment: f64,  // u2, N·m, about body x
    pub pitch_moment: f64, // u3, N·m, about body y
    pub yaw_moment: f64,   // u4, N·m, about body z
}

/// Quadratic rotor loads from commanded angular speeds.
///
/// Speeds are squared as commanded: a negative command still produces
/// positive thrust. Saturation artifacts propagate as ordinary values.
pub fn rotor_loads(cmd: &RotorCommand, airframe: &Airframe) -> RotorLoads {
    let mut thrust = [0.0; 4];
    let mut torque = [0.0; 4];
    for i in 0..4 {
        let w2 = cmd.speeds[i] * cmd.speeds[i];
        thrust[i] = airframe.k_thrust * w2;
        torque[i] = airframe.k_moment * w2;
    }
    RotorLoads { thrust, torque }
}

/// Collapse per-rotor loads into the four control channels:
/// u1 = Σf_i, u2 = l·(f2 − f4), u3 = l·(f3 − f1), u4 = m1 − m2 + m3 − m4.
pub fn control_forces(loads: &RotorLoads, airframe: &Airframe) -> ControlForces {
    let [f1, f2, f3, f4] = loads.thrust;
    let [m1, m2, m3, m4] = loads.torque;
    ControlForces {
        thrust: f1 + f2 + f3 + f4,
        roll_moment: airframe.arm_length * (f2 - f4),
        pitch_moment: airframe.arm_length * (f3 - f1),
        yaw_moment: m1 - m2 + m3 - m4,
    }
}

/// Rotor command straight to control channels.
pub fn forces_from_command(cmd: &RotorCommand, airframe: &Airframe) -> ControlForces {
    control_forces(&rotor_loads(cmd, airframe), airframe)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::Airframe;
    use approx::assert_relative_eq;

    fn reference_airframe() -> Airframe {
        Airframe::builder().build().unwrap()
    }

    #[test]
    fn hover_command_balances_weight() {
        let af = reference_airframe();
        let cmd = RotorCommand::hover(&af);
        let u = forces_from_command(&cmd, &af);
        assert_relative_eq!(u.thrust, af.mass * af.gravity, epsilon = 1e-9);
        assert_relative_eq!(u.roll_moment, 0.0, epsilon = 1e-12);
        assert_relative_eq!(u.pitch_moment, 0.0, epsilon = 1e-12);
        assert_relative_eq!(u.yaw_moment, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotor_2_over_4_rolls_positive() {
        let af = reference_airframe();
        let w = af.hover_speed();
        let cmd = RotorCommand { speeds: [w, w + 5.0, w, w - 5.0] };
        let u = forces_from_command(&cmd, &af);
        assert!(u.roll_moment > 0.0, "f2 > f4 must roll positive, got {}", u.roll_moment);
        assert_relative_eq!(u.pitch_moment, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotor_3_over_1_pitches_positive() {
        let af = reference_airframe();
        let w = af.hover_speed();
        let cmd = RotorCommand { speeds: [w - 5.0, w, w + 5.0, w] };
        let u = forces_from_command(&cmd, &af);
        assert!(u.pitch_moment > 0.0, "f3 > f1 must pitch positive, got {}", u.pitch_moment);
        assert_relative_eq!(u.roll_moment, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn alternating_pair_yaws() {
        let af = reference_airframe();
        let w = af.hover_speed();
        let cmd = RotorCommand { speeds: [w + 5.0, w - 5.0, w + 5.0, w - 5.0] };
        let u = forces_from_command(&cmd, &af);
        assert!(u.yaw_moment > 0.0, "1&3 over 2&4 must yaw positive, got {}", u.yaw_moment);
    }

    #[test]
    fn negative_speed_squares_to_positive_thrust() {
        let af = reference_airframe();
        let pos = rotor_loads(&RotorCommand { speeds: [50.0; 4] }, &af);
        let neg = rotor_loads(&RotorCommand { speeds: [-50.0; 4] }, &af);
        assert_eq!(pos.thrust, neg.thrust);
    }
}
