use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Construction-time precondition violations. Fatal; surfaced to the caller
/// before any simulation state exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("flight plan must contain at least one waypoint")]
    EmptyFlightPlan,

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },
}

/// Per-tick failures. The simulation does not recover from either; the
/// caller decides whether to abort or restart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error("time step must be positive, got {0}")]
    NonPositiveDt(f64),

    /// The body-rate to Euler-rate transform divides by cos(pitch) and is
    /// singular at pitch = ±90°. Surfaced instead of propagating Inf/NaN
    /// through the state.
    #[error("attitude singular: pitch {pitch} rad is at gimbal lock")]
    SingularAttitude { pitch: f64 },
}

pub(crate) fn require_positive(what: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_passes_through() {
        assert_eq!(require_positive("mass", 1.08).unwrap(), 1.08);
    }

    #[test]
    fn zero_and_negative_rejected() {
        assert!(require_positive("mass", 0.0).is_err());
        let err = require_positive("arm length", -0.1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositive { what: "arm length", value: -0.1 }
        );
    }
}
