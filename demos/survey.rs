use quad_sim::io::{csv, json};
use quad_sim::sim::{simulate, Simulation};
use quad_sim::types::{Airframe, SimConfig};
use quad_sim::vehicle::flight_plan::presets;

fn main() {
    let airframe = Airframe::builder().build().expect("reference airframe");
    let plan = presets::survey_route();

    let mut sim = Simulation::new(airframe, plan.clone()).expect("valid plan");
    let config = SimConfig::default();

    println!("Flying survey route ({} waypoints)...", plan.len());
    let log = simulate(&mut sim, &config).expect("route stays away from gimbal lock");

    let summary = json::MissionSummary::from_log(&log, &plan);
    println!(
        "{} in {:.1} s, {} checkpoints, final error {:.3} m",
        if summary.mission_complete { "Complete" } else { "Timed out" },
        summary.flight_time,
        summary.checkpoints_reached,
        summary.final_error_m
    );

    csv::write_telemetry_file("survey_telemetry.csv", &log).expect("write telemetry");
    json::write_summary_file("survey_summary.json", &plan, &summary).expect("write summary");
    println!("Wrote survey_telemetry.csv and survey_summary.json");
}
