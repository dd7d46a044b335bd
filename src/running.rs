//! Running workout statistics
//!
//! Distance and mean speed use the shared step-based defaults; the
//! calorie formula scales with mean speed, weight and duration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::models::WorkoutKind;
use crate::workout::{Workout, MIN_IN_H, M_IN_KM};

/// A recorded running workout
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    /// Step count from the sensor
    action: u32,
    /// Duration in hours
    duration_h: Decimal,
    /// Athlete weight in kilograms
    weight_kg: Decimal,
}

impl Running {
    pub fn new(action: u32, duration_h: Decimal, weight_kg: Decimal) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> Decimal {
        self.duration_h
    }

    fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// calories = (18 × speed − 20) × weight / 1000 × duration × 60
    fn spent_calories(&self) -> Result<Decimal, CalculationError> {
        let speed = self.mean_speed_kmh();
        Ok((dec!(18) * speed - dec!(20)) * self.weight_kg / M_IN_KM
            * self.duration_h
            * MIN_IN_H)
    }
}
