pub mod rigid_body;
pub mod state;

pub use rigid_body::RigidBody;
pub use state::{RotorCommand, SimConfig, State};
