use std::time::Duration;

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// Pause after a word has been fully typed.
pub const FULL_PAUSE_MS: f64 = 2000.0;
/// Pause after a word has been fully erased, before the next one starts.
pub const EMPTY_PAUSE_MS: f64 = 500.0;
/// Each deleting tick divides the interval by this.
pub const DELETE_DIVISOR: f64 = 1.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimingError {
    #[error("{field} must be a finite, non-negative number of milliseconds")]
    NotADuration { field: &'static str },
    #[error("typing delay range is empty ({min}..{max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("delete divisor must be at least 1 (got {0})")]
    Divisor(f64),
}

/// Timings for the typewriter. All values are milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CyclerTiming {
    pub type_delay_min_ms: f64,
    pub type_delay_max_ms: f64,
    pub full_pause_ms: f64,
    pub empty_pause_ms: f64,
    pub delete_divisor: f64,
    /// Lower bound for the accelerating erase. `None` lets the delay shrink
    /// toward zero on long words.
    pub min_delete_delay_ms: Option<f64>,
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self {
            type_delay_min_ms: 100.0,
            type_delay_max_ms: 200.0,
            full_pause_ms: FULL_PAUSE_MS,
            empty_pause_ms: EMPTY_PAUSE_MS,
            delete_divisor: DELETE_DIVISOR,
            min_delete_delay_ms: None,
        }
    }
}

fn check(field: &'static str, value: f64) -> Result<(), TimingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TimingError::NotADuration { field })
    }
}

impl CyclerTiming {
    pub fn validate(&self) -> Result<(), TimingError> {
        check("type_delay_min_ms", self.type_delay_min_ms)?;
        check("type_delay_max_ms", self.type_delay_max_ms)?;
        check("full_pause_ms", self.full_pause_ms)?;
        check("empty_pause_ms", self.empty_pause_ms)?;
        if let Some(floor) = self.min_delete_delay_ms {
            check("min_delete_delay_ms", floor)?;
        }
        if self.type_delay_min_ms >= self.type_delay_max_ms {
            return Err(TimingError::EmptyRange {
                min: self.type_delay_min_ms,
                max: self.type_delay_max_ms,
            });
        }
        if !self.delete_divisor.is_finite() || self.delete_divisor < 1.0 {
            return Err(TimingError::Divisor(self.delete_divisor));
        }
        Ok(())
    }

    /// Picks the typing speed for a freshly mounted cycler, in `[min, max)`.
    pub fn initial_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.type_delay_min_ms..self.type_delay_max_ms)
    }

    pub(crate) fn accelerate(&self, interval: f64) -> f64 {
        let next = interval / self.delete_divisor;
        match self.min_delete_delay_ms {
            Some(floor) => next.max(floor),
            None => next,
        }
    }
}

pub fn millis(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_defaults_are_valid() {
        let timing = CyclerTiming::default();
        assert!(timing.validate().is_ok());
        assert_eq!(timing.full_pause_ms, 2000.0);
        assert_eq!(timing.empty_pause_ms, 500.0);
        assert_eq!(timing.min_delete_delay_ms, None);
    }

    #[test]
    fn test_initial_delay_in_range() {
        let timing = CyclerTiming::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let d = timing.initial_delay(&mut rng);
            assert!((100.0..200.0).contains(&d), "{d} out of range");
        }
    }

    #[test]
    fn test_validation_errors() {
        let timing = CyclerTiming {
            type_delay_min_ms: 200.0,
            type_delay_max_ms: 200.0,
            ..Default::default()
        };
        assert!(matches!(
            timing.validate(),
            Err(TimingError::EmptyRange { .. })
        ));

        let timing = CyclerTiming {
            delete_divisor: 0.5,
            ..Default::default()
        };
        assert_eq!(timing.validate(), Err(TimingError::Divisor(0.5)));

        let timing = CyclerTiming {
            full_pause_ms: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            timing.validate(),
            Err(TimingError::NotADuration {
                field: "full_pause_ms"
            })
        );

        let timing = CyclerTiming {
            min_delete_delay_ms: Some(-1.0),
            ..Default::default()
        };
        assert!(timing.validate().is_err());
    }

    #[test]
    fn test_accelerate_with_and_without_floor() {
        let timing = CyclerTiming::default();
        assert_eq!(timing.accelerate(2000.0), 2000.0 / 1.5);
        assert!(timing.accelerate(0.001) < 0.001);

        let timing = CyclerTiming {
            min_delete_delay_ms: Some(30.0),
            ..Default::default()
        };
        assert_eq!(timing.accelerate(40.0), 30.0);
        assert_eq!(timing.accelerate(90.0), 60.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let timing: CyclerTiming =
            serde_json::from_str(r#"{ "full_pause_ms": 1500, "min_delete_delay_ms": 20 }"#)
                .unwrap();
        assert_eq!(timing.full_pause_ms, 1500.0);
        assert_eq!(timing.min_delete_delay_ms, Some(20.0));
        assert_eq!(timing.empty_pause_ms, 500.0);
    }

    #[test]
    fn test_millis() {
        assert_eq!(millis(500.0), Duration::from_millis(500));
        assert_eq!(millis(-3.0), Duration::ZERO);
    }
}
