use crate::dynamics::state::State;
use crate::vehicle::{FlightPlan, Waypoint};

use super::event::EventKind;

// ---------------------------------------------------------------------------
// Waypoint sequencer: Tracking → TerminalApproach → MissionComplete
// ---------------------------------------------------------------------------

/// Where the sequencer is along the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Heading for waypoint k with at least one more after it.
    Tracking(usize),
    /// Heading for the final waypoint.
    TerminalApproach,
    /// Arrived; absorbing.
    MissionComplete,
}

/// Tracks the active waypoint index over an immutable `FlightPlan`.
///
/// The index only ever advances, one waypoint per tick at most, and stays
/// below the plan length. Mission completion is judged against the final
/// waypoint every tick regardless of the active index, so a trajectory that
/// wanders into the terminal tolerance box completes the mission even with
/// intermediate checkpoints unvisited.
#[derive(Debug, Clone)]
pub struct WaypointSequencer {
    index: usize,
    complete: bool,
}

impl WaypointSequencer {
    pub fn new() -> Self {
        WaypointSequencer { index: 0, complete: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn phase(&self, plan: &FlightPlan) -> Phase {
        if self.complete {
            Phase::MissionComplete
        } else if self.index + 1 == plan.len() {
            Phase::TerminalApproach
        } else {
            Phase::Tracking(self.index)
        }
    }

    /// The waypoint currently being tracked.
    pub fn target(&self, plan: &FlightPlan) -> Waypoint {
        plan.get(self.index)
    }

    /// Evaluate transitions against the just-integrated state. Returns zero,
    /// one, or two events (a checkpoint and completion can fire on the same
    /// tick when the advanced-to waypoint is the final one already in reach).
    pub fn check(&mut self, plan: &FlightPlan, state: &State) -> Vec<EventKind> {
        let mut events = Vec::new();
        if self.complete {
            return events;
        }

        if self.index + 1 < plan.len() && within_box(state, plan.get(self.index), plan.tolerance) {
            events.push(EventKind::CheckpointReached { index: self.index });
            self.index += 1;
        }

        if within_box(state, plan.last(), plan.tolerance) {
            self.complete = true;
            events.push(EventKind::MissionComplete);
        }

        events
    }
}

impl Default for WaypointSequencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-axis tolerance box, not a Euclidean disc.
fn within_box(state: &State, wp: Waypoint, tolerance: f64) -> bool {
    (state.pos.x - wp.x).abs() < tolerance && (state.pos.y - wp.y).abs() < tolerance
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
