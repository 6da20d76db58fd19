// ---------------------------------------------------------------------------
// Mission events
// ---------------------------------------------------------------------------

/// Kinds of discrete mission events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An intermediate waypoint was reached; carries its index.
    CheckpointReached { index: usize },
    /// The vehicle arrived inside the tolerance box of the final waypoint.
    /// Emitted at most once per mission.
    MissionComplete,
}

/// A discrete event with the simulation time at which it fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionEvent {
    pub time: f64,
    pub kind: EventKind,
}

impl MissionEvent {
    pub fn new(time: f64, kind: EventKind) -> Self {
        MissionEvent { time, kind }
    }
}
