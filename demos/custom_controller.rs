use quad_sim::gnc::{Controller, Setpoint};
use quad_sim::sim::{simulate_with, Simulation};
use quad_sim::types::{Airframe, RotorCommand, SimConfig, State, Waypoint};
use quad_sim::vehicle::FlightPlan;

/// A collective-only controller: holds altitude with a plain PD on the
/// vertical axis and ignores the horizontal plane entirely. Useful as a
/// baseline when tuning the full cascade.
struct AltitudeHold {
    kp: f64,
    kd: f64,
}

impl Controller for AltitudeHold {
    fn control(
        &mut self,
        state: &State,
        setpoint: &Setpoint,
        airframe: &Airframe,
        _dt: f64,
    ) -> RotorCommand {
        let accel = self.kp * (setpoint.pos.z - state.pos.z) + self.kd * (-state.vel.z);
        let trim = airframe.mass * accel / (8.0 * airframe.k_thrust * airframe.hover_speed());
        RotorCommand { speeds: [airframe.hover_speed() + trim; 4] }
    }

    fn name(&self) -> &str {
        "AltitudeHold"
    }
}

fn main() {
    let airframe = Airframe::builder().build().expect("reference airframe");
    // The waypoint is out of reach for this controller (it never moves
    // horizontally), so the run goes the full max_time and shows the climb.
    let plan = FlightPlan::new(vec![Waypoint::new(50.0, 0.0)])
        .expect("non-empty plan")
        .cruise_altitude(10.0)
        .tolerance(0.5);

    let mut sim = Simulation::new(airframe, plan).expect("valid plan");
    let config = SimConfig { dt: 0.1, max_time: 60.0 };

    let mut controller = AltitudeHold { kp: 1.0, kd: 2.0 };
    println!("Simulating with {} controller...", controller.name());
    let log = simulate_with(&mut sim, &config, &mut controller).expect("level flight");

    for s in log.states.iter().step_by(20) {
        println!("t={:>5.1}s  z={:>6.2} m  vz={:>6.2} m/s", s.time, s.pos.z, s.vel.z);
    }
    let end = log.final_state();
    println!("Final altitude: {:.2} m after {:.1} s", end.pos.z, end.time);
}
