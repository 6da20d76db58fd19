use std::io::{self, Write};

use crate::sim::{EventKind, FlightLog};
use crate::vehicle::FlightPlan;

/// Summary statistics computed from a completed (or aborted) flight.
#[derive(Debug, Clone)]
pub struct MissionSummary {
    pub flight_time: f64,
    pub checkpoints_reached: usize,
    pub mission_complete: bool,
    pub final_error_m: f64,
    pub max_speed: f64,
    pub max_tilt_deg: f64,
}

impl MissionSummary {
    /// Compute summary from a flight log and its plan.
    pub fn from_log(log: &FlightLog, plan: &FlightPlan) -> Self {
        let checkpoints_reached = log
            .events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::CheckpointReached { .. }))
            .count();

        let max_speed = log
            .states
            .iter()
            .map(|s| s.vel.norm())
            .fold(0.0_f64, f64::max);

        let max_tilt_deg = log
            .states
            .iter()
            .map(|s| s.roll().abs().max(s.pitch().abs()))
            .fold(0.0_f64, f64::max)
            .to_degrees();

        let end = log.final_state();
        let last = plan.last();

        MissionSummary {
            flight_time: end.time,
            checkpoints_reached,
            mission_complete: log.mission_complete(),
            final_error_m: end.horizontal_distance(last.x, last.y),
            max_speed,
            max_tilt_deg,
        }
    }
}

/// Write mission summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    plan: &FlightPlan,
    summary: &MissionSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"plan\": {{")?;
    writeln!(writer, "    \"waypoints\": {},", plan.len())?;
    writeln!(writer, "    \"cruise_altitude_m\": {:.2},", plan.cruise_altitude)?;
    writeln!(writer, "    \"tolerance_m\": {:.3}", plan.tolerance)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"mission\": {{")?;
    writeln!(writer, "    \"flight_time_s\": {:.2},", summary.flight_time)?;
    writeln!(writer, "    \"checkpoints_reached\": {},", summary.checkpoints_reached)?;
    writeln!(writer, "    \"complete\": {},", summary.mission_complete)?;
    writeln!(writer, "    \"final_error_m\": {:.4},", summary.final_error_m)?;
    writeln!(writer, "    \"max_speed_ms\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"max_tilt_deg\": {:.2}", summary.max_tilt_deg)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write mission summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    plan: &FlightPlan,
    summary: &MissionSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, plan, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{RotorCommand, State};
    use crate::sim::MissionEvent;
    use crate::vehicle::Waypoint;
    use nalgebra::Vector3;

    fn short_log() -> (FlightLog, FlightPlan) {
        let plan = FlightPlan::new(vec![Waypoint::new(0.0, 0.0), Waypoint::new(10.0, 5.0)])
            .unwrap();
        let log = FlightLog {
            states: vec![
                State::at_rest(),
                State {
                    time: 42.0,
                    pos: Vector3::new(10.02, 4.97, 25.0),
                    vel: Vector3::new(0.1, 0.0, 0.0),
                    att: Vector3::new(0.0, 0.05, 0.0),
                    rates: Vector3::zeros(),
                },
            ],
            rotors: vec![RotorCommand::default(); 2],
            events: vec![
                MissionEvent::new(0.1, EventKind::CheckpointReached { index: 0 }),
                MissionEvent::new(42.0, EventKind::MissionComplete),
            ],
        };
        (log, plan)
    }

    #[test]
    fn summary_counts_checkpoints_and_completion() {
        let (log, plan) = short_log();
        let s = MissionSummary::from_log(&log, &plan);
        assert_eq!(s.checkpoints_reached, 1);
        assert!(s.mission_complete);
        assert!((s.flight_time - 42.0).abs() < 1e-12);
        assert!(s.final_error_m < 0.05);
        assert!((s.max_tilt_deg - 0.05_f64.to_degrees()).abs() < 1e-9);
    }

    #[test]
    fn json_output_is_valid() {
        let (log, plan) = short_log();
        let summary = MissionSummary::from_log(&log, &plan);

        let mut buf = Vec::new();
        write_summary(&mut buf, &plan, &summary).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"plan\""));
        assert!(json.contains("\"checkpoints_reached\": 1"));
        assert!(json.contains("\"complete\": true"));
    }
}
