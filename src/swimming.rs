//! Swimming workout statistics
//!
//! Swimming replaces the step-based speed estimate with a pool-based
//! one (pool length × lap count over duration) and uses a longer
//! stroke length for the distance estimate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::models::WorkoutKind;
use crate::workout::{Workout, M_IN_KM};

/// Meters covered by one stroke
const STROKE_LENGTH_M: Decimal = dec!(1.38);

/// A recorded swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    /// Stroke count from the sensor
    action: u32,
    /// Duration in hours
    duration_h: Decimal,
    /// Athlete weight in kilograms
    weight_kg: Decimal,
    /// Pool length in meters
    pool_length_m: Decimal,
    /// Number of completed laps
    lap_count: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: Decimal,
        weight_kg: Decimal,
        pool_length_m: Decimal,
        lap_count: u32,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            lap_count,
        }
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
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

    fn step_length_m(&self) -> Decimal {
        STROKE_LENGTH_M
    }

    /// speed = pool_length × lap_count / 1000 / duration
    fn mean_speed_kmh(&self) -> Decimal {
        self.pool_length_m * Decimal::from(self.lap_count) / M_IN_KM / self.duration_h
    }

    /// calories = (speed + 1.1) × 2 × weight
    fn spent_calories(&self) -> Result<Decimal, CalculationError> {
        Ok((self.mean_speed_kmh() + dec!(1.1)) * dec!(2) * self.weight_kg)
    }
}
