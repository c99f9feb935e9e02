use crate::WorkoutKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout kind \"{0}\"")]
    UnknownWorkoutKind(String),
    #[error("duration must not be zero")]
    DivisionByZero,
    #[error("{kind} expects {expected} fields ({found} given)")]
    FieldCount {
        kind: WorkoutKind,
        expected: usize,
        found: usize,
    },
    #[error("invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },
}
