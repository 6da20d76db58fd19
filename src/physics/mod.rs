pub mod propulsion;
pub mod rotation;

pub use propulsion::{control_forces, forces_from_command, rotor_loads, ControlForces, RotorLoads};
pub use rotation::{body_to_inertial, euler_rate_transform};
