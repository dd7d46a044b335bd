//! Core workout statistics abstraction
//!
//! Every workout kind stores the raw sensor fields and derives
//! distance, mean speed and calories from them. Distance and mean
//! speed have shared step-based defaults; the calorie formula is
//! kind-specific and has no default, so a kind that does not override
//! it reports an unimplemented-operation error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::models::{WorkoutKind, WorkoutSummary};

/// Meters covered by one step, shared by step-counting workouts
pub const STEP_LENGTH_M: Decimal = dec!(0.65);

/// Meters per kilometer
pub const M_IN_KM: Decimal = dec!(1000);

/// Minutes per hour
pub const MIN_IN_H: Decimal = dec!(60);

/// A single recorded workout with derived statistics
///
/// Object-safe so the factory can hand out `Box<dyn Workout>`.
pub trait Workout: std::fmt::Debug {
    /// The concrete workout kind
    fn kind(&self) -> WorkoutKind;

    /// Step or stroke count reported by the sensor
    fn action(&self) -> u32;

    /// Duration of the workout in hours
    fn duration_h(&self) -> Decimal;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> Decimal;

    /// Step length in meters used for the distance estimate
    fn step_length_m(&self) -> Decimal {
        STEP_LENGTH_M
    }

    /// Distance covered in kilometers
    fn distance_km(&self) -> Decimal {
        Decimal::from(self.action()) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in kilometers per hour
    fn mean_speed_kmh(&self) -> Decimal {
        self.distance_km() / self.duration_h()
    }

    /// Calories burned in kcal
    ///
    /// Kind-specific; the default body is the unimplemented-operation
    /// guard and must be overridden by every shipped kind.
    fn spent_calories(&self) -> Result<Decimal, CalculationError> {
        Err(CalculationError::UnimplementedOperation {
            workout: self.kind().name(),
            operation: "spent_calories",
        })
    }

    /// Build the read-only summary for this workout
    fn summarize(&self) -> Result<WorkoutSummary, CalculationError> {
        Ok(WorkoutSummary {
            workout: self.kind(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A kind that stores the shared fields but never overrides the
    /// calorie formula.
    #[derive(Debug)]
    struct CaloriesMissing;

    impl Workout for CaloriesMissing {
        fn kind(&self) -> WorkoutKind {
            WorkoutKind::Running
        }

        fn action(&self) -> u32 {
            1000
        }

        fn duration_h(&self) -> Decimal {
            dec!(1)
        }

        fn weight_kg(&self) -> Decimal {
            dec!(70)
        }
    }

    #[test]
    fn test_default_distance_and_speed() {
        let workout = CaloriesMissing;
        assert_eq!(workout.distance_km(), dec!(0.65));
        assert_eq!(workout.mean_speed_kmh(), dec!(0.65));
    }

    #[test]
    fn test_missing_calorie_override_errors() {
        let workout = CaloriesMissing;
        let err = workout.spent_calories().unwrap_err();
        assert_eq!(
            err,
            CalculationError::UnimplementedOperation {
                workout: "Running",
                operation: "spent_calories",
            }
        );
        // summarize must surface the same error, not a partial summary
        assert!(workout.summarize().is_err());
    }
}
