pub mod event;
pub mod runner;
pub mod sequencer;

pub use event::{EventKind, MissionEvent};
pub use runner::{simulate, simulate_with, FlightLog, Simulation, StepOutput};
pub use sequencer::{Phase, WaypointSequencer};
