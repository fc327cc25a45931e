//! Workout model - per-discipline distance, speed and calorie formulas
//!
//! Disciplines form a closed set, so each computation is a single `match`
//! over the discipline. A `Workout` can only be built through its
//! validating constructors.

use crate::domain::error::{WorkoutError, WorkoutResult};
use crate::domain::types::WorkoutCode;
use serde::Serialize;

/// Step length for running and walking (meters)
pub const LEN_STEP: f64 = 0.65;
/// Stroke length for swimming (meters)
pub const LEN_STROKE: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Readings common to every discipline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes counted by the sensor
    action: f64,
    duration_h: f64,
    weight_kg: f64,
}

impl Session {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        non_negative("action", action)?;
        positive("duration", duration_h)?;
        non_negative("weight", weight_kg)?;
        Ok(Self { action, duration_h, weight_kg })
    }

    pub fn action(&self) -> f64 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

fn non_negative(field: &'static str, value: f64) -> WorkoutResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::InvalidReading { field, value })
    }
}

/// Divisors must be strictly positive; zero or negative is a division error
fn positive(field: &'static str, value: f64) -> WorkoutResult<()> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidReading { field, value });
    }
    if value <= 0.0 {
        return Err(WorkoutError::DivisionByZero { field, value });
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> WorkoutResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::NonFiniteResult { field, value })
    }
}

/// Floor division with the quotient rounded toward negative infinity.
///
/// Works from the remainder rather than `floor(a / b)`, so a quotient that
/// rounds up to an integer in floating point (e.g. `3.9² / 1.69`) still
/// floors to the integer below it.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    // `%` keeps the dividend's sign; step down when it disagrees with the divisor
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div != 0.0 {
        let mut floor_div = div.floor();
        if div - floor_div > 0.5 {
            floor_div += 1.0;
        }
        floor_div
    } else {
        0.0_f64.copysign(a / b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Discipline {
    Running,
    SportsWalking { height: f64 },
    Swimming { pool_length_m: f64, pool_count: f64 },
}

/// A validated workout: shared session readings plus discipline extras
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    session: Session,
    discipline: Discipline,
}

impl Workout {
    pub fn running(session: Session) -> Self {
        Self { session, discipline: Discipline::Running }
    }

    pub fn sports_walking(session: Session, height: f64) -> WorkoutResult<Self> {
        positive("height", height)?;
        Ok(Self { session, discipline: Discipline::SportsWalking { height } })
    }

    pub fn swimming(session: Session, pool_length_m: f64, pool_count: f64) -> WorkoutResult<Self> {
        non_negative("pool_length", pool_length_m)?;
        non_negative("pool_count", pool_count)?;
        Ok(Self { session, discipline: Discipline::Swimming { pool_length_m, pool_count } })
    }

    pub fn code(&self) -> WorkoutCode {
        match self.discipline {
            Discipline::Running => WorkoutCode::Running,
            Discipline::SportsWalking { .. } => WorkoutCode::SportsWalking,
            Discipline::Swimming { .. } => WorkoutCode::Swimming,
        }
    }

    /// Human-readable discipline name used in reports
    pub fn training_type(&self) -> &'static str {
        match self.discipline {
            Discipline::Running => "Running",
            Discipline::SportsWalking { .. } => "SportsWalking",
            Discipline::Swimming { .. } => "Swimming",
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Walker height, for walking workouts only
    pub fn height(&self) -> Option<f64> {
        match self.discipline {
            Discipline::SportsWalking { height } => Some(height),
            _ => None,
        }
    }

    /// Pool length (m) and lap count, for swimming workouts only
    pub fn pool(&self) -> Option<(f64, f64)> {
        match self.discipline {
            Discipline::Swimming { pool_length_m, pool_count } => Some((pool_length_m, pool_count)),
            _ => None,
        }
    }

    /// Distance covered in km
    pub fn distance(&self) -> f64 {
        let step = match self.discipline {
            Discipline::Running | Discipline::SportsWalking { .. } => LEN_STEP,
            Discipline::Swimming { .. } => LEN_STROKE,
        };
        self.session.action * step / M_IN_KM
    }

    /// Mean speed in km/h
    pub fn mean_speed(&self) -> f64 {
        match self.discipline {
            Discipline::Running | Discipline::SportsWalking { .. } => {
                self.distance() / self.session.duration_h
            }
            Discipline::Swimming { pool_length_m, pool_count } => {
                pool_length_m * pool_count / M_IN_KM / self.session.duration_h
            }
        }
    }

    /// Calories spent over the whole session (kcal)
    pub fn calories(&self) -> f64 {
        let speed = self.mean_speed();
        let Session { duration_h, weight_kg, .. } = self.session;
        match self.discipline {
            Discipline::Running => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Discipline::SportsWalking { height } => {
                let speed_height_ratio = floor_div(speed.powi(2), height);
                (WALK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_height_ratio * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Discipline::Swimming { .. } => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg
            }
        }
    }

    /// Compute every figure once and freeze them into a summary.
    ///
    /// Readings large enough to overflow a figure are rejected instead of
    /// reported as `inf` or `NaN`.
    pub fn summary(&self) -> WorkoutResult<WorkoutSummary> {
        Ok(WorkoutSummary {
            training_type: self.training_type(),
            duration: self.session.duration_h,
            distance: finite("distance", self.distance())?,
            speed: finite("speed", self.mean_speed())?,
            calories: finite("calories", self.calories())?,
        })
    }
}

/// Computed result of one workout, ready for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    #[serde(rename = "type")]
    pub training_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn session(action: f64, duration_h: f64, weight_kg: f64) -> Session {
        Session::new(action, duration_h, weight_kg).unwrap()
    }

    #[test]
    fn test_running_formulas() {
        let workout = Workout::running(session(15000.0, 1.0, 75.0));
        assert!((workout.distance() - 9.75).abs() < EPS);
        assert!((workout.mean_speed() - 9.75).abs() < EPS);
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert!((workout.calories() - 699.75).abs() < EPS);
    }

    #[test]
    fn test_walking_formulas() {
        let workout = Workout::sports_walking(session(9000.0, 1.0, 75.0), 180.0).unwrap();
        assert!((workout.distance() - 5.85).abs() < EPS);
        assert!((workout.mean_speed() - 5.85).abs() < EPS);
        // 5.85^2 // 180 == 0, only the weight term remains
        assert!((workout.calories() - 157.5).abs() < EPS);
        assert_eq!(workout.height(), Some(180.0));
        assert_eq!(workout.pool(), None);
    }

    #[test]
    fn test_walking_floor_division_term() {
        // speed = 13 km/h, 169 // 2 == 84
        let workout = Workout::sports_walking(session(20000.0, 1.0, 70.0), 2.0).unwrap();
        assert!((workout.mean_speed() - 13.0).abs() < EPS);
        let expected = (0.035 * 70.0 + 84.0 * 0.029 * 70.0) * 60.0;
        assert!((workout.calories() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_floor_div_when_quotient_rounds_up() {
        // 3.9^2 / 1.69 rounds to 9.0, but the true quotient is just below 9
        assert_eq!(floor_div(3.9_f64.powi(2), 1.69), 8.0);
        // 6.5^2 / 0.65 rounds to 65.0, the true quotient is just below 65
        assert_eq!(floor_div(6.5_f64.powi(2), 0.65), 64.0);
    }

    #[test]
    fn test_floor_div_signs() {
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(6.0, 3.0), 2.0);
        assert_eq!(floor_div(0.5, 2.0), 0.0);
    }

    #[test]
    fn test_walking_calories_use_floor_division() {
        // 3.9^2 // 1.69 == 8: (0.035 * 75 + 8 * 0.029 * 75) * 60
        let workout = Workout::sports_walking(session(6000.0, 1.0, 75.0), 1.69).unwrap();
        assert!((workout.calories() - 1201.5).abs() < 1e-6);

        // 6.5^2 // 0.65 == 64: (0.035 * 75 + 64 * 0.029 * 75) * 60
        let workout = Workout::sports_walking(session(10000.0, 1.0, 75.0), 0.65).unwrap();
        assert!((workout.calories() - 8509.5).abs() < 1e-6);
    }

    #[test]
    fn test_swimming_formulas() {
        let workout = Workout::swimming(session(720.0, 1.0, 80.0), 25.0, 40.0).unwrap();
        assert!((workout.distance() - 0.9936).abs() < EPS);
        assert!((workout.mean_speed() - 1.0).abs() < EPS);
        assert!((workout.calories() - 336.0).abs() < EPS);
        assert_eq!(workout.pool(), Some((25.0, 40.0)));
    }

    #[test]
    fn test_running_slow_pace_goes_negative() {
        // Below 20/18 km/h the running formula yields negative calories
        let workout = Workout::running(session(1000.0, 1.0, 75.0));
        assert!(workout.calories() < 0.0);
    }

    #[test]
    fn test_zero_duration_is_division_error() {
        assert_eq!(
            Session::new(15000.0, 0.0, 75.0),
            Err(WorkoutError::DivisionByZero { field: "duration", value: 0.0 })
        );
    }

    #[test]
    fn test_zero_height_is_division_error() {
        let result = Workout::sports_walking(session(9000.0, 1.0, 75.0), 0.0);
        assert_eq!(result, Err(WorkoutError::DivisionByZero { field: "height", value: 0.0 }));
    }

    #[test]
    fn test_negative_and_non_finite_readings_rejected() {
        assert_eq!(
            Session::new(-1.0, 1.0, 75.0),
            Err(WorkoutError::InvalidReading { field: "action", value: -1.0 })
        );
        assert!(matches!(
            Session::new(100.0, f64::INFINITY, 75.0),
            Err(WorkoutError::InvalidReading { field: "duration", .. })
        ));
        assert!(matches!(
            Workout::swimming(session(720.0, 1.0, 80.0), f64::NAN, 40.0),
            Err(WorkoutError::InvalidReading { field: "pool_length", .. })
        ));
    }

    #[test]
    fn test_overflowing_readings_rejected_in_summary() {
        // speed^2 overflows to inf, the walking calories become NaN
        let workout = Workout::sports_walking(session(1e308, 1.0, 75.0), 180.0).unwrap();
        assert!(matches!(
            workout.summary(),
            Err(WorkoutError::NonFiniteResult { field: "calories", .. })
        ));
    }

    #[test]
    fn test_summary_carries_training_type() {
        let workout = Workout::swimming(session(720.0, 1.0, 80.0), 25.0, 40.0).unwrap();
        let summary = workout.summary().unwrap();
        assert_eq!(summary.training_type, "Swimming");
        assert_eq!(summary.duration, 1.0);
        assert_eq!(workout.code(), WorkoutCode::Swimming);
        assert_eq!(workout.session().weight_kg(), 80.0);
    }
}
