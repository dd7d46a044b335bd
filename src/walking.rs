//! Walking workout statistics
//!
//! Shares the step-based distance and mean speed with running and adds
//! the athlete's height, which enters the calorie formula through a
//! floor-divided speed²/height term.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::CalculationError;
use crate::models::WorkoutKind;
use crate::workout::{Workout, MIN_IN_H};

/// A recorded walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    /// Step count from the sensor
    action: u32,
    /// Duration in hours
    duration_h: Decimal,
    /// Athlete weight in kilograms
    weight_kg: Decimal,
    /// Athlete height in centimeters
    height_cm: Decimal,
}

impl Walking {
    pub fn new(
        action: u32,
        duration_h: Decimal,
        weight_kg: Decimal,
        height_cm: Decimal,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for Walking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
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

    /// calories = (0.035 × weight + ⌊speed² / height⌋ × 0.029 × weight)
    ///            × duration × 60
    ///
    /// The speed²/height term is floored, not truly divided; the
    /// upstream formula is defined that way and summaries must match.
    fn spent_calories(&self) -> Result<Decimal, CalculationError> {
        let speed = self.mean_speed_kmh();
        let speed_term = (speed * speed / self.height_cm).floor();
        Ok((dec!(0.035) * self.weight_kg + speed_term * dec!(0.029) * self.weight_kg)
            * self.duration_h
            * MIN_IN_H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_walk() -> Walking {
        // Reference sensor packet: 9000 steps, 1 h, 75 kg, 180 cm
        Walking::new(9000, dec!(1), dec!(75), dec!(180))
    }

    #[test]
    fn test_distance_and_speed() {
        let walk = reference_walk();
        assert_eq!(walk.distance_km(), dec!(5.85));
        assert_eq!(walk.mean_speed_kmh(), dec!(5.85));
    }

    #[test]
    fn test_spent_calories_floors_speed_term() {
        // 5.85² / 180 = 0.19012… floors to zero, leaving only the
        // weight term: 0.035 * 75 * 60.
        assert_eq!(reference_walk().spent_calories().unwrap(), dec!(157.500));
    }

    #[test]
    fn test_spent_calories_with_nonzero_speed_term() {
        // 20000 steps in one hour: speed 13 km/h
        let brisk = Walking::new(20000, dec!(1), dec!(80), dec!(160));
        let speed = brisk.mean_speed_kmh();
        assert_eq!(speed, dec!(13));
        // 13² / 160 = 1.05625 floors to 1
        let expected = (dec!(0.035) * dec!(80) + dec!(1) * dec!(0.029) * dec!(80)) * dec!(60);
        assert_eq!(brisk.spent_calories().unwrap(), expected);
    }

    #[test]
    fn test_summary() {
        let summary = reference_walk().summarize().unwrap();
        assert_eq!(summary.workout, WorkoutKind::Walking);
        assert_eq!(summary.distance_km, dec!(5.85));
        assert_eq!(summary.calories_kcal, dec!(157.500));
    }
}
