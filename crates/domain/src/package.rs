use log::debug;

use crate::{Running, Swimming, Walking, Workout, WorkoutError, WorkoutKind};

/// Raw sensor reading: a workout code followed by positional values.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

/// Turn a sensor package into a workout.
///
/// The values are mapped to the fields of the workout kind selected by `code`
/// in the order given by [`WorkoutKind::fields`]. A zero duration is accepted
/// here and only rejected when the workout is summarized.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = code.parse::<WorkoutKind>()?;
    let fields = kind.fields();

    if data.len() != fields.len() {
        return Err(WorkoutError::FieldCount {
            kind,
            expected: fields.len(),
            found: data.len(),
        });
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::from(Running {
            steps: count(fields[0], data[0])?,
            duration_hours: measure(fields[1], data[1])?,
            weight_kg: measure(fields[2], data[2])?,
        }),
        WorkoutKind::Walking => Workout::from(Walking {
            steps: count(fields[0], data[0])?,
            duration_hours: measure(fields[1], data[1])?,
            weight_kg: measure(fields[2], data[2])?,
            height_cm: measure(fields[3], data[3])?,
        }),
        WorkoutKind::Swimming => Workout::from(Swimming {
            strokes: count(fields[0], data[0])?,
            duration_hours: measure(fields[1], data[1])?,
            weight_kg: measure(fields[2], data[2])?,
            pool_length_m: measure(fields[3], data[3])?,
            pool_laps: count(fields[4], data[4])?,
        }),
    };

    debug!("read {code} package as {workout:?}");

    Ok(workout)
}

fn measure(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if measure(field, value)?.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(WorkoutError::InvalidField { field, value });
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::running(
        "RUN",
        vec![15000.0, 1.0, 75.0],
        Workout::from(Running { steps: 15000, duration_hours: 1.0, weight_kg: 75.0 })
    )]
    #[case::walking(
        "WLK",
        vec![9000.0, 1.0, 75.0, 180.0],
        Workout::from(Walking { steps: 9000, duration_hours: 1.0, weight_kg: 75.0, height_cm: 180.0 })
    )]
    #[case::swimming(
        "SWM",
        vec![720.0, 1.0, 80.0, 25.0, 40.0],
        Workout::from(Swimming {
            strokes: 720,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        })
    )]
    #[case::zero_duration(
        "RUN",
        vec![15000.0, 0.0, 75.0],
        Workout::from(Running { steps: 15000, duration_hours: 0.0, weight_kg: 75.0 })
    )]
    fn test_read_package(#[case] code: &str, #[case] data: Vec<f64>, #[case] expected: Workout) {
        assert_eq!(read_package(code, &data), Ok(expected.clone()));
        assert_eq!(Package::new(code, &data).read(), Ok(expected));
    }

    #[rstest]
    #[case::unknown_code(
        "BIKE",
        vec![15000.0, 1.0, 75.0],
        WorkoutError::UnknownWorkoutKind("BIKE".to_string())
    )]
    #[case::too_few_fields(
        "WLK",
        vec![9000.0, 1.0, 75.0],
        WorkoutError::FieldCount { kind: WorkoutKind::Walking, expected: 4, found: 3 }
    )]
    #[case::too_many_fields(
        "RUN",
        vec![15000.0, 1.0, 75.0, 180.0],
        WorkoutError::FieldCount { kind: WorkoutKind::Running, expected: 3, found: 4 }
    )]
    #[case::negative_steps(
        "RUN",
        vec![-1.0, 1.0, 75.0],
        WorkoutError::InvalidField { field: "steps", value: -1.0 }
    )]
    #[case::fractional_laps(
        "SWM",
        vec![720.0, 1.0, 80.0, 25.0, 40.5],
        WorkoutError::InvalidField { field: "pool_laps", value: 40.5 }
    )]
    #[case::too_many_strokes(
        "SWM",
        vec![5e9, 1.0, 80.0, 25.0, 40.0],
        WorkoutError::InvalidField { field: "strokes", value: 5e9 }
    )]
    #[case::negative_weight(
        "WLK",
        vec![9000.0, 1.0, -75.0, 180.0],
        WorkoutError::InvalidField { field: "weight_kg", value: -75.0 }
    )]
    #[case::infinite_height(
        "WLK",
        vec![9000.0, 1.0, 75.0, f64::INFINITY],
        WorkoutError::InvalidField { field: "height_cm", value: f64::INFINITY }
    )]
    fn test_read_package_error(
        #[case] code: &str,
        #[case] data: Vec<f64>,
        #[case] expected: WorkoutError,
    ) {
        assert_eq!(read_package(code, &data), Err(expected));
    }

    #[test]
    fn test_read_package_nan() {
        assert!(matches!(
            read_package("RUN", &[15000.0, f64::NAN, 75.0]),
            Err(WorkoutError::InvalidField { field: "duration_hours", value }) if value.is_nan()
        ));
    }
}
