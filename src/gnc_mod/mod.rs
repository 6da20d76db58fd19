pub mod attitude;
pub mod cascade;
pub mod controller;
pub mod pd;
pub mod position;

pub use attitude::{attitude_loop, mix};
pub use cascade::CascadedPd;
pub use controller::Controller;
pub use pd::Pd;
pub use position::{position_loop, AttitudeCommand, Setpoint};
