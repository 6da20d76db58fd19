use std::io::{self, Write};

use crate::sim::FlightLog;

/// Write a flight log as CSV telemetry.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z,
///          roll, pitch, yaw, p, q, r, omega1, omega2, omega3, omega4
pub fn write_telemetry<W: Write>(writer: &mut W, log: &FlightLog) -> io::Result<()> {
    writeln!(
        writer,
        "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,\
         roll,pitch,yaw,p,q,r,\
         omega1,omega2,omega3,omega4"
    )?;

    for (s, cmd) in log.states.iter().zip(log.rotors.iter()) {
        let [w1, w2, w3, w4] = cmd.speeds;
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},\
             {:.6},{:.6},{:.6},{:.6},{:.6},{:.6},\
             {:.2},{:.2},{:.2},{:.2}",
            s.time,
            s.pos.x, s.pos.y, s.pos.z,
            s.vel.x, s.vel.y, s.vel.z,
            s.roll(), s.pitch(), s.yaw(),
            s.rates.x, s.rates.y, s.rates.z,
            w1, w2, w3, w4,
        )?;
    }

    Ok(())
}

/// Write telemetry to a CSV file at the given path.
pub fn write_telemetry_file(path: &str, log: &FlightLog) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_telemetry(&mut file, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{RotorCommand, State};
    use nalgebra::Vector3;

    #[test]
    fn csv_output_has_header_and_rows() {
        let log = FlightLog {
            states: vec![
                State::at_rest(),
                State {
                    time: 0.1,
                    pos: Vector3::new(0.0, 0.0, 0.5),
                    vel: Vector3::new(0.0, 0.0, 5.0),
                    att: Vector3::zeros(),
                    rates: Vector3::zeros(),
                },
            ],
            rotors: vec![RotorCommand::default(), RotorCommand { speeds: [110.0; 4] }],
            events: vec![],
        };

        let mut buf = Vec::new();
        write_telemetry(&mut buf, &log).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,"));
        assert!(lines[2].ends_with("110.00,110.00,110.00,110.00"));
    }
}
