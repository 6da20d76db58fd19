use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Waypoints and flight plan
// ---------------------------------------------------------------------------

/// A 2-D target in the inertial horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub x: f64, // m
    pub y: f64, // m
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Waypoint { x, y }
    }
}

/// Ordered waypoint sequence plus the fixed-altitude mission parameters.
///
/// The sequence is immutable once built and guaranteed non-empty; tracking
/// progress lives in `sim::WaypointSequencer`, not here.
#[derive(Debug, Clone)]
pub struct FlightPlan {
    waypoints: Vec<Waypoint>,
    pub cruise_altitude: f64, // m, z_des held for the whole mission
    pub heading: f64,         // rad, ψ_des
    pub heading_rate: f64,    // rad/s, r_des
    pub tolerance: f64,       // m, per-axis checkpoint box ε
}

impl FlightPlan {
    /// Build a plan over a non-empty waypoint sequence with the reference
    /// mission defaults (25 m altitude, zero heading, 0.1 m tolerance).
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::EmptyFlightPlan);
        }
        Ok(FlightPlan {
            waypoints,
            cruise_altitude: 25.0,
            heading: 0.0,
            heading_rate: 0.0,
            tolerance: 0.1,
        })
    }

    pub fn cruise_altitude(mut self, v: f64) -> Self { self.cruise_altitude = v; self }
    pub fn heading(mut self, v: f64) -> Self { self.heading = v; self }
    pub fn heading_rate(mut self, v: f64) -> Self { self.heading_rate = v; self }
    pub fn tolerance(mut self, v: f64) -> Self { self.tolerance = v; self }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        false // non-empty by construction
    }

    pub fn get(&self, k: usize) -> Waypoint {
        self.waypoints[k]
    }

    /// The terminal waypoint; mission completion is judged against it.
    pub fn last(&self) -> Waypoint {
        *self.waypoints.last().expect("plan is non-empty")
    }
}

// ---------------------------------------------------------------------------
// Preset plans
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Reference six-point survey route over a 20 m × 30 m area.
    pub fn survey_route() -> FlightPlan {
        FlightPlan::new(vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(10.0, 5.0),
            Waypoint::new(10.0, 20.0),
            Waypoint::new(15.0, 20.0),
            Waypoint::new(15.0, 30.0),
            Waypoint::new(20.0, 30.0),
        ])
        .expect("preset route is non-empty")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_rejected() {
        assert_eq!(FlightPlan::new(vec![]).unwrap_err(), ConfigError::EmptyFlightPlan);
    }

    #[test]
    fn single_waypoint_plan_allowed() {
        let plan = FlightPlan::new(vec![Waypoint::new(3.0, 4.0)]).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.last(), Waypoint::new(3.0, 4.0));
    }

    #[test]
    fn setters_chain() {
        let plan = FlightPlan::new(vec![Waypoint::new(0.0, 0.0)])
            .unwrap()
            .cruise_altitude(12.0)
            .heading(0.3)
            .tolerance(0.5);
        assert_eq!(plan.cruise_altitude, 12.0);
        assert_eq!(plan.heading, 0.3);
        assert_eq!(plan.tolerance, 0.5);
    }

    #[test]
    fn survey_route_shape() {
        let plan = presets::survey_route();
        assert_eq!(plan.len(), 6);
        assert_eq!(plan.get(0), Waypoint::new(0.0, 0.0));
        assert_eq!(plan.last(), Waypoint::new(20.0, 30.0));
    }
}
