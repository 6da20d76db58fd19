use crate::dynamics::state::{RotorCommand, State};
use crate::vehicle::Airframe;

use super::position::Setpoint;

/// Trait for flight controllers.
///
/// Implement this to plug a custom control law into the simulation loop in
/// place of the default PD cascade.
pub trait Controller {
    /// Compute rotor speed commands from current state and setpoint.
    fn control(
        &mut self,
        state: &State,
        setpoint: &Setpoint,
        airframe: &Airframe,
        dt: f64,
    ) -> RotorCommand;

    /// Reset controller internal state, if any.
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
