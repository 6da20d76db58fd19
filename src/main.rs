use quad_sim::io::json::MissionSummary;
use quad_sim::sim::{simulate, EventKind, Simulation};
use quad_sim::types::{Airframe, SimConfig};
use quad_sim::vehicle::flight_plan::presets;

fn main() {
    // -----------------------------------------------------------------------
    // Vehicle: reference 1.08 kg micro quad
    // -----------------------------------------------------------------------
    let airframe = Airframe::builder().build().expect("reference airframe is valid");
    let plan = presets::survey_route();

    let config = SimConfig {
        dt: 0.1,
        max_time: 3600.0,
    };

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let mut sim = Simulation::new(airframe.clone(), plan.clone())
        .expect("preset plan passes validation");
    let log = match simulate(&mut sim, &config) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("simulation aborted: {e}");
            std::process::exit(1);
        }
    };

    let summary = MissionSummary::from_log(&log, &plan);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  QUADROTOR WAYPOINT MISSION — survey route");
    println!("====================================================================");
    println!();
    println!("  Airframe");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.2} kg    Arm length:   {:>8.2} m",
        airframe.mass, airframe.arm_length
    );
    println!(
        "  k_thrust:      {:>8.1e}     k_moment:     {:>8.1e}",
        airframe.k_thrust, airframe.k_moment
    );
    println!(
        "  Ixx:           {:>8.4} kg·m²  Hover speed: {:>8.1} rad/s",
        airframe.ixx(),
        airframe.hover_speed()
    );
    println!();

    println!("  Mission Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in &log.events {
        match event.kind {
            EventKind::CheckpointReached { index } => {
                let wp = plan.get(index);
                println!(
                    "  CHECKPOINT {}  t={:>7.1}s   ({:.1}, {:.1})",
                    index, event.time, wp.x, wp.y
                );
            }
            EventKind::MissionComplete => {
                println!("  COMPLETE      t={:>7.1}s", event.time);
            }
        }
    }
    println!();

    println!("  Mission Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Flight time:   {:>8.1} s", summary.flight_time);
    println!(
        "  Checkpoints:   {:>8} of {}",
        summary.checkpoints_reached,
        plan.len() - 1
    );
    println!(
        "  Mission:       {:>8}",
        if summary.mission_complete { "COMPLETE" } else { "TIMEOUT" }
    );
    println!("  Final error:   {:>8.3} m", summary.final_error_m);
    println!("  Max speed:     {:>8.2} m/s", summary.max_speed);
    println!("  Max tilt:      {:>8.2} deg", summary.max_tilt_deg);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>8}  {:>8}  {:>8}  {:>9}  {:>8}",
        "t (s)", "x (m)", "y (m)", "z (m)", "vel (m/s)", "target"
    );
    println!("  {}", "─".repeat(60));

    let sample_interval = (log.states.len() / 30).max(1);
    let mut next_target = 0usize;
    for (i, s) in log.states.iter().enumerate() {
        // Track which waypoint was active at this sample.
        while log
            .events
            .iter()
            .any(|e| e.time <= s.time && e.kind == (EventKind::CheckpointReached { index: next_target }))
        {
            next_target += 1;
        }

        if i % sample_interval != 0 && i != log.states.len() - 1 {
            continue;
        }

        println!(
            "  {:>7.1}  {:>8.2}  {:>8.2}  {:>8.2}  {:>9.2}  {:>8}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.pos.z,
            s.vel.norm(),
            next_target.min(plan.len() - 1),
        );
    }

    println!();
    println!("  Simulation: {} steps, dt={} s", log.states.len() - 1, config.dt);
    println!("====================================================================");
    println!();
}
