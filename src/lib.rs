pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;
pub mod vehicle;
mod gnc_mod;

// The gnc module: expose gnc_mod as `gnc` publicly
pub mod gnc {
    pub use crate::gnc_mod::*;
}

// Convenience re-exports
pub mod types {
    pub use crate::dynamics::state::{RotorCommand, SimConfig, State};
    pub use crate::error::{ConfigError, StepError};
    pub use crate::vehicle::airframe::{Airframe, AirframeBuilder};
    pub use crate::vehicle::flight_plan::{FlightPlan, Waypoint};
    pub use crate::vehicle::gains::ControlGains;
}
