use std::str::FromStr;

use derive_more::Display;
use log::warn;
use strum::{AsRefStr, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::WorkoutError;

#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Walking(_) => WorkoutKind::Walking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        match self {
            Workout::Running(running) => running.duration_hours,
            Workout::Walking(walking) => walking.duration_hours,
            Workout::Swimming(swimming) => swimming.duration_hours,
        }
    }

    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        match self {
            Workout::Running(running) => running.weight_kg,
            Workout::Walking(walking) => walking.weight_kg,
            Workout::Swimming(swimming) => swimming.weight_kg,
        }
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<Walking> for Workout {
    fn from(value: Walking) -> Self {
        Workout::Walking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub steps: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub steps: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub strokes: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

/// Kind of a workout as identified by the three-letter code of a sensor package.
///
/// The display name is the one shown in reports, the code (`as_ref`) is the one
/// used for dispatch.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr, EnumIter)]
pub enum WorkoutKind {
    #[strum(serialize = "RUN")]
    Running,
    #[display("SportsWalking")]
    #[strum(serialize = "WLK")]
    Walking,
    #[strum(serialize = "SWM")]
    Swimming,
}

impl WorkoutKind {
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Number of positional values in a sensor package of this kind.
    #[must_use]
    pub fn field_count(self) -> usize {
        self.fields().len()
    }

    #[must_use]
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["steps", "duration_hours", "weight_kg"],
            WorkoutKind::Walking => &["steps", "duration_hours", "weight_kg", "height_cm"],
            WorkoutKind::Swimming => &[
                "strokes",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::iter()
            .find(|kind| kind.as_ref() == code)
            .ok_or_else(|| {
                warn!("rejected workout code \"{code}\"");
                WorkoutError::UnknownWorkoutKind(code.to_string())
            })
    }
}
