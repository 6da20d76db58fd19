pub mod airframe;
pub mod flight_plan;
pub mod gains;

pub use airframe::{Airframe, AirframeBuilder};
pub use flight_plan::{FlightPlan, Waypoint};
pub use gains::ControlGains;
