//! Shared types: workout codes and raw sensor packages

use crate::domain::error::WorkoutError;
use serde::Deserialize;

/// Sensor code identifying the discipline of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutCode {
    #[cfg(test)]
    pub const ALL: [WorkoutCode; 3] =
        [WorkoutCode::Running, WorkoutCode::SportsWalking, WorkoutCode::Swimming];

    /// Wire code as sent by the sensor block
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
            WorkoutCode::Swimming => "SWM",
        }
    }

    /// Number of readings a package of this code carries
    pub fn reading_count(&self) -> usize {
        match self {
            WorkoutCode::Running => 3,
            WorkoutCode::SportsWalking => 4,
            WorkoutCode::Swimming => 5,
        }
    }
}

impl std::fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(WorkoutCode::Running),
            "WLK" => Ok(WorkoutCode::SportsWalking),
            "SWM" => Ok(WorkoutCode::Swimming),
            other => Err(WorkoutError::UnsupportedWorkoutType(other.to_string())),
        }
    }
}

/// One raw package from the sensor block: a code and its flat readings.
///
/// The code stays a plain string so an unknown code is reported per entry
/// instead of rejecting the whole package list at load time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub readings: Vec<f64>,
}

impl Package {
    pub fn new(code: &str, readings: &[f64]) -> Self {
        Self { code: code.to_string(), readings: readings.to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in WorkoutCode::ALL {
            assert_eq!(code.as_str().parse::<WorkoutCode>(), Ok(code));
        }
    }

    #[test]
    fn test_code_is_case_sensitive() {
        assert_eq!(
            "run".parse::<WorkoutCode>(),
            Err(WorkoutError::UnsupportedWorkoutType("run".to_string()))
        );
    }

    #[test]
    fn test_reading_counts() {
        assert_eq!(WorkoutCode::Running.reading_count(), 3);
        assert_eq!(WorkoutCode::SportsWalking.reading_count(), 4);
        assert_eq!(WorkoutCode::Swimming.reading_count(), 5);
    }

    #[test]
    fn test_package_deserializes_integer_readings() {
        let package: Package = toml::from_str("code = \"RUN\"\nreadings = [15000, 1, 75]").unwrap();
        assert_eq!(package, Package::new("RUN", &[15000.0, 1.0, 75.0]));
    }
}
