use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout kinds supported by the statistics system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    /// All supported kinds, in wire-code order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    /// Display name used in rendered summaries
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "Walking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Short type code emitted by the sensor
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Resolve a sensor type code to a workout kind
    pub fn from_code(code: &str) -> Option<WorkoutKind> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::Walking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    /// Number of sensor fields the kind's constructor takes
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One raw sensor reading: a type code plus an ordered field list
///
/// The field layout is positional and kind-specific: every packet
/// starts with action count, duration in hours and weight in kg;
/// walking appends height in cm, swimming appends pool length in
/// meters and lap count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    /// Workout type code ("RUN", "WLK" or "SWM")
    pub workout_type: String,

    /// Ordered numeric fields matching the kind's constructor arity
    pub data: Vec<Decimal>,
}

impl SensorPacket {
    pub fn new(workout_type: impl Into<String>, data: Vec<Decimal>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Derived statistics for a single workout
///
/// Created once per `summarize` call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout kind the statistics were computed for
    pub workout: WorkoutKind,

    /// Duration of the workout in hours
    pub duration_h: Decimal,

    /// Distance covered in kilometers
    pub distance_km: Decimal,

    /// Mean speed in kilometers per hour
    pub mean_speed_kmh: Decimal,

    /// Calories burned in kcal
    pub calories_kcal: Decimal,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.workout.name(),
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
