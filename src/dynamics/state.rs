use nalgebra::Vector3;

use crate::vehicle::Airframe;

// ---------------------------------------------------------------------------
// Vehicle state: position, velocity, Euler attitude, body rates
// ---------------------------------------------------------------------------

/// Full state vector at a single point in time.
/// Frame: inertial right-handed, z up; attitude as ZYX Euler angles.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub time: f64,            // s
    pub pos: Vector3<f64>,    // m, inertial
    pub vel: Vector3<f64>,    // m/s, inertial
    pub att: Vector3<f64>,    // rad, [roll φ, pitch θ, yaw ψ]
    pub rates: Vector3<f64>,  // rad/s, body frame [p, q, r]
}

impl State {
    /// All-zero state at t = 0 (at rest at the origin, level).
    pub fn at_rest() -> Self {
        State {
            time: 0.0,
            pos: Vector3::zeros(),
            vel: Vector3::zeros(),
            att: Vector3::zeros(),
            rates: Vector3::zeros(),
        }
    }

    pub fn roll(&self) -> f64 {
        self.att.x
    }

    pub fn pitch(&self) -> f64 {
        self.att.y
    }

    pub fn yaw(&self) -> f64 {
        self.att.z
    }

    /// Horizontal distance to a point in the inertial xy-plane.
    pub fn horizontal_distance(&self, x: f64, y: f64) -> f64 {
        ((self.pos.x - x).powi(2) + (self.pos.y - y).powi(2)).sqrt()
    }
}

// ---------------------------------------------------------------------------
// Rotor speed command
// ---------------------------------------------------------------------------

/// Commanded angular speeds for rotors 1..4 (rad/s). Recomputed every tick;
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorCommand {
    pub speeds: [f64; 4],
}

impl RotorCommand {
    /// All four rotors at the analytic hover speed.
    pub fn hover(airframe: &Airframe) -> Self {
        RotorCommand { speeds: [airframe.hover_speed(); 4] }
    }
}

impl Default for RotorCommand {
    fn default() -> Self {
        RotorCommand { speeds: [0.0; 4] }
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,        // integration timestep, s
    pub max_time: f64,  // hard stop, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,           // 10 Hz, the reference control rate
            max_time: 3600.0,  // 1 h ceiling
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_rest_is_all_zero() {
        let s = State::at_rest();
        assert_eq!(s.time, 0.0);
        assert_eq!(s.pos, Vector3::zeros());
        assert_eq!(s.vel, Vector3::zeros());
        assert_eq!(s.att, Vector3::zeros());
        assert_eq!(s.rates, Vector3::zeros());
    }

    #[test]
    fn horizontal_distance_ignores_altitude() {
        let mut s = State::at_rest();
        s.pos = Vector3::new(3.0, 4.0, 25.0);
        assert!((s.horizontal_distance(0.0, 0.0) - 5.0).abs() < 1e-12);
    }
}
