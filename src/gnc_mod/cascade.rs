use crate::dynamics::state::{RotorCommand, State};
use crate::vehicle::{Airframe, ControlGains};

use super::attitude::attitude_loop;
use super::position::{position_loop, Setpoint};

// ---------------------------------------------------------------------------
// Cascaded PD controller: position loop feeding attitude loop
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CascadedPd {
    pub gains: ControlGains,
}

impl CascadedPd {
    pub fn new() -> Self {
        Self { gains: ControlGains::default() }
    }

    pub fn with_gains(gains: ControlGains) -> Self {
        Self { gains }
    }

    /// One control update: outer loop, then inner loop.
    pub fn update(
        &self,
        state: &State,
        setpoint: &Setpoint,
        airframe: &Airframe,
        dt: f64,
    ) -> RotorCommand {
        let attitude_cmd = position_loop(setpoint, state, airframe, &self.gains, dt);
        attitude_loop(&attitude_cmd, setpoint, state, airframe, &self.gains)
    }
}

impl Default for CascadedPd {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Controller for CascadedPd {
    fn control(
        &mut self,
        state: &State,
        setpoint: &Setpoint,
        airframe: &Airframe,
        dt: f64,
    ) -> RotorCommand {
        self.update(state, setpoint, airframe, dt)
    }

    fn name(&self) -> &str {
        "CascadedPd"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
