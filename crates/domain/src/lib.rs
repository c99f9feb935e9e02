#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod calculator;

mod error;
mod package;
mod report;
mod workout;

pub use calculator::{calories_kcal, distance_km, mean_speed_kmh, summarize};
pub use error::WorkoutError;
pub use package::{Package, read_package};
pub use report::{WorkoutSummary, format};
pub use workout::{Running, Swimming, Walking, Workout, WorkoutKind};
