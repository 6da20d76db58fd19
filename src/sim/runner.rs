use crate::dynamics::state::{RotorCommand, SimConfig, State};
use crate::dynamics::RigidBody;
use crate::error::{require_positive, ConfigError, StepError};
use crate::gnc::{CascadedPd, Controller, Setpoint};
use crate::physics::forces_from_command;
use crate::vehicle::{Airframe, FlightPlan};

use super::event::MissionEvent;
use super::sequencer::{Phase, WaypointSequencer};

// ---------------------------------------------------------------------------
// Per-tick orchestration
// ---------------------------------------------------------------------------

/// One simulation: airframe + plan + exclusively-owned vehicle state.
///
/// Each `step` runs the fixed tick order: sequencer target → position loop →
/// attitude loop → propulsion → integration → sequencer transition check.
/// The host drives the loop; there is no internal timer.
#[derive(Debug, Clone)]
pub struct Simulation {
    airframe: Airframe,
    plan: FlightPlan,
    body: RigidBody,
    sequencer: WaypointSequencer,
}

/// Everything a tick produces.
#[derive(Debug, Clone)]
pub struct StepOutput {
    pub state: State,
    pub rotors: RotorCommand,
    pub events: Vec<MissionEvent>,
}

impl Simulation {
    /// Start a mission at rest at the origin.
    pub fn new(airframe: Airframe, plan: FlightPlan) -> Result<Self, ConfigError> {
        require_positive("checkpoint tolerance", plan.tolerance)?;
        Ok(Simulation {
            airframe,
            plan,
            body: RigidBody::new(),
            sequencer: WaypointSequencer::new(),
        })
    }

    pub fn airframe(&self) -> &Airframe {
        &self.airframe
    }

    pub fn plan(&self) -> &FlightPlan {
        &self.plan
    }

    pub fn state(&self) -> &State {
        self.body.state()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase(&self.plan)
    }

    pub fn is_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    /// Setpoint for the active waypoint: hold its position at cruise
    /// altitude, zero velocity, plan heading.
    pub fn setpoint(&self) -> Setpoint {
        let wp = self.sequencer.target(&self.plan);
        let mut sp = Setpoint::hold(wp.x, wp.y, self.plan.cruise_altitude);
        sp.yaw = self.plan.heading;
        sp.yaw_rate = self.plan.heading_rate;
        sp
    }

    /// Advance one tick with the supplied controller.
    pub fn step(
        &mut self,
        controller: &mut dyn Controller,
        dt: f64,
    ) -> Result<StepOutput, StepError> {
        if dt <= 0.0 {
            return Err(StepError::NonPositiveDt(dt));
        }

        let setpoint = self.setpoint();
        let rotors = controller.control(self.body.state(), &setpoint, &self.airframe, dt);
        let forces = forces_from_command(&rotors, &self.airframe);
        let state = self.body.advance(&forces, &self.airframe, dt)?.clone();

        let events = self
            .sequencer
            .check(&self.plan, &state)
            .into_iter()
            .map(|kind| MissionEvent::new(state.time, kind))
            .collect();

        Ok(StepOutput { state, rotors, events })
    }
}

// ---------------------------------------------------------------------------
// Batch drivers
// ---------------------------------------------------------------------------

/// Trajectory, rotor commands, and event log of a full run. `states[i]`
/// pairs with `rotors[i]`; index 0 is the initial state with idle rotors.
#[derive(Debug, Clone)]
pub struct FlightLog {
    pub states: Vec<State>,
    pub rotors: Vec<RotorCommand>,
    pub events: Vec<MissionEvent>,
}

impl FlightLog {
    pub fn final_state(&self) -> &State {
        self.states.last().expect("log always holds the initial state")
    }

    pub fn mission_complete(&self) -> bool {
        self.events
            .iter()
            .any(|e| e.kind == super::event::EventKind::MissionComplete)
    }
}

/// Run a mission to completion (or `max_time`) with a custom controller.
pub fn simulate_with(
    sim: &mut Simulation,
    config: &SimConfig,
    controller: &mut dyn Controller,
) -> Result<FlightLog, StepError> {
    let capacity = (config.max_time / config.dt.max(1e-9)) as usize + 1;
    let cap = capacity.min(200_000);
    let mut states = Vec::with_capacity(cap);
    let mut rotors = Vec::with_capacity(cap);
    let mut events = Vec::new();

    states.push(sim.state().clone());
    rotors.push(RotorCommand::default());

    while sim.state().time < config.max_time && !sim.is_complete() {
        let out = sim.step(controller, config.dt)?;
        states.push(out.state);
        rotors.push(out.rotors);
        events.extend(out.events);
    }

    Ok(FlightLog { states, rotors, events })
}

/// Run with the default PD cascade (convenience wrapper).
pub fn simulate(sim: &mut Simulation, config: &SimConfig) -> Result<FlightLog, StepError> {
    let mut controller = CascadedPd::new();
    simulate_with(sim, config, &mut controller)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
