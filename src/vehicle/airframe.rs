use crate::error::{require_positive, ConfigError};

// ---------------------------------------------------------------------------
// Airframe definition (physical parameters, immutable after build)
// ---------------------------------------------------------------------------

/// Quadrotor physical parameters.
///
/// The principal moments of inertia are derived from mass and arm length
/// (Ixx = 2·m·l², Iyy = Ixx, Izz = 2·Ixx) and exposed as accessors so the
/// family constraint cannot be violated by construction.
#[derive(Debug, Clone)]
pub struct Airframe {
    pub mass: f64,        // kg
    pub arm_length: f64,  // m, rotor hub to CG
    pub k_thrust: f64,    // N·s², thrust per squared rotor speed
    pub k_moment: f64,    // N·m·s², reaction torque per squared rotor speed
    pub gravity: f64,     // m/s²
}

impl Airframe {
    pub fn builder() -> AirframeBuilder {
        AirframeBuilder::new()
    }

    /// Roll-axis moment of inertia, kg·m².
    pub fn ixx(&self) -> f64 {
        2.0 * self.mass * self.arm_length * self.arm_length
    }

    /// Pitch-axis moment of inertia; equal to Ixx for this symmetric frame.
    pub fn iyy(&self) -> f64 {
        self.ixx()
    }

    /// Yaw-axis moment of inertia; twice Ixx for this frame.
    pub fn izz(&self) -> f64 {
        2.0 * self.ixx()
    }

    /// Rotor speed at which four rotors carry the weight:
    /// ω_h = sqrt(m·g / (4·k_thrust)), rad/s.
    pub fn hover_speed(&self) -> f64 {
        (self.mass * self.gravity / (4.0 * self.k_thrust)).sqrt()
    }
}

// ---------------------------------------------------------------------------
// Airframe builder
// ---------------------------------------------------------------------------

/// Builder preloaded with the reference platform: a 1.08 kg micro quad with
/// 12 cm arms.
pub struct AirframeBuilder {
    mass: f64,
    arm_length: f64,
    k_thrust: f64,
    k_moment: f64,
    gravity: f64,
}

impl AirframeBuilder {
    pub fn new() -> Self {
        Self {
            mass: 1.08,
            arm_length: 0.12,
            k_thrust: 2.2e-4,
            k_moment: 5.4e-6,
            gravity: 9.81,
        }
    }

    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn arm_length(mut self, v: f64) -> Self { self.arm_length = v; self }
    pub fn k_thrust(mut self, v: f64) -> Self { self.k_thrust = v; self }
    pub fn k_moment(mut self, v: f64) -> Self { self.k_moment = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.gravity = v; self }

    /// Validate and build. Every parameter must be strictly positive.
    pub fn build(self) -> Result<Airframe, ConfigError> {
        Ok(Airframe {
            mass: require_positive("mass", self.mass)?,
            arm_length: require_positive("arm length", self.arm_length)?,
            k_thrust: require_positive("thrust coefficient", self.k_thrust)?,
            k_moment: require_positive("moment coefficient", self.k_moment)?,
            gravity: require_positive("gravity", self.gravity)?,
        })
    }
}

impl Default for AirframeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
