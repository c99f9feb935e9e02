use log::debug;

use crate::{Running, Swimming, Walking, Workout, WorkoutError, WorkoutSummary};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

pub const STEP_LEN_M: f64 = 0.65;
pub const STROKE_LEN_M: f64 = 1.38;

pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 1.79;

pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

#[must_use]
pub fn distance_km(steps: u32, stride_len_km: f64) -> f64 {
    f64::from(steps) * stride_len_km
}

#[allow(clippy::float_cmp)]
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> Result<f64, WorkoutError> {
    if duration_hours == 0.0 {
        return Err(WorkoutError::DivisionByZero);
    }

    Ok(distance_km / duration_hours)
}

pub fn calories_kcal(workout: &Workout) -> Result<f64, WorkoutError> {
    match workout {
        Workout::Running(running) => running.calories_kcal(),
        Workout::Walking(walking) => walking.calories_kcal(),
        Workout::Swimming(swimming) => swimming.calories_kcal(),
    }
}

/// Derive distance, mean speed and calories of a workout.
///
/// Fails with [`WorkoutError::DivisionByZero`] if the duration is zero.
pub fn summarize(workout: &Workout) -> Result<WorkoutSummary, WorkoutError> {
    let summary = WorkoutSummary {
        kind: workout.kind(),
        duration_hours: workout.duration_hours(),
        distance_km: workout.distance_km(),
        mean_speed_kmh: workout.mean_speed_kmh()?,
        calories_kcal: calories_kcal(workout)?,
    };

    debug!("summarized {workout:?} as {summary:?}");

    Ok(summary)
}

impl Workout {
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(Running { steps, .. }) | Workout::Walking(Walking { steps, .. }) => {
                distance_km(*steps, STEP_LEN_M / M_IN_KM)
            }
            Workout::Swimming(Swimming { strokes, .. }) => {
                distance_km(*strokes, STROKE_LEN_M / M_IN_KM)
            }
        }
    }

    pub fn mean_speed_kmh(&self) -> Result<f64, WorkoutError> {
        match self {
            Workout::Swimming(swimming) => swimming.mean_speed_kmh(),
            _ => mean_speed_kmh(self.distance_km(), self.duration_hours()),
        }
    }
}

impl Running {
    fn calories_kcal(&self) -> Result<f64, WorkoutError> {
        let speed = mean_speed_kmh(
            distance_km(self.steps, STEP_LEN_M / M_IN_KM),
            self.duration_hours,
        )?;
        Ok(
            (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * self.weight_kg / M_IN_KM
                * self.duration_hours
                * MIN_IN_H,
        )
    }
}

impl Walking {
    fn calories_kcal(&self) -> Result<f64, WorkoutError> {
        let speed = mean_speed_kmh(
            distance_km(self.steps, STEP_LEN_M / M_IN_KM),
            self.duration_hours,
        )?;
        Ok((WALK_WEIGHT_MULTIPLIER * self.weight_kg
            + (speed * KMH_IN_MSEC).powi(2) / (self.height_cm / CM_IN_M)
                * WALK_SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * self.duration_hours
            * MIN_IN_H)
    }
}

impl Swimming {
    /// Speed over the laps swum, independent of the stroke count.
    fn mean_speed_kmh(&self) -> Result<f64, WorkoutError> {
        mean_speed_kmh(
            self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM,
            self.duration_hours,
        )
    }

    fn calories_kcal(&self) -> Result<f64, WorkoutError> {
        Ok(
            (self.mean_speed_kmh()? + SWIM_SPEED_SHIFT)
                * SWIM_WEIGHT_MULTIPLIER
                * self.weight_kg
                * self.duration_hours,
        )
    }
}
