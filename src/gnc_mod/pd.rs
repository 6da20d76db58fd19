// ---------------------------------------------------------------------------
// PD law (single axis)
// ---------------------------------------------------------------------------

/// Proportional-derivative law: kp·error + kd·error_rate.
///
/// Stateless: the rate term is supplied by the caller, not differentiated
/// here, so one `Pd` can serve both loops of the cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pd {
    pub kp: f64,
    pub kd: f64,
}

impl Pd {
    pub const fn new(kp: f64, kd: f64) -> Self {
        Self { kp, kd }
    }

    pub fn output(&self, error: f64, error_rate: f64) -> f64 {
        self.kp * error + self.kd * error_rate
    }
}
