use std::fmt;

use crate::WorkoutKind;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub kind: WorkoutKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

#[must_use]
pub fn format(summary: &WorkoutSummary) -> String {
    summary.to_string()
}
