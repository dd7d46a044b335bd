use fitstat::error::PacketError;
use fitstat::{Workout, WorkoutFactory};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Property tests for the calculation invariants: distance and mean
/// speed stay non-negative for positive inputs, and summaries are a
/// pure function of the stored fields.

/// Duration in hours with two decimal places, 0.01..=24.00
fn duration_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=2400).prop_map(|raw| Decimal::new(raw, 2))
}

/// Weight in kg with two decimal places, 30.00..=150.00
fn weight_strategy() -> impl Strategy<Value = Decimal> {
    (3000i64..=15000).prop_map(|raw| Decimal::new(raw, 2))
}

fn assert_nonnegative_and_pure(workout: &dyn Workout) {
    assert!(workout.distance_km() >= Decimal::ZERO);
    assert!(workout.mean_speed_kmh() >= Decimal::ZERO);

    let first = workout.summarize().unwrap();
    let second = workout.summarize().unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn running_invariants(
        action in 0u32..200_000,
        duration in duration_strategy(),
        weight in weight_strategy(),
    ) {
        let workout = WorkoutFactory::create(
            "RUN",
            &[Decimal::from(action), duration, weight],
        ).unwrap();
        assert_nonnegative_and_pure(workout.as_ref());
    }

    #[test]
    fn walking_invariants(
        action in 0u32..200_000,
        duration in duration_strategy(),
        weight in weight_strategy(),
        height in 100i64..=220,
    ) {
        let workout = WorkoutFactory::create(
            "WLK",
            &[Decimal::from(action), duration, weight, Decimal::from(height)],
        ).unwrap();
        assert_nonnegative_and_pure(workout.as_ref());

        // Walking calories are non-negative: both formula terms are
        // products of non-negative factors.
        assert!(workout.spent_calories().unwrap() >= Decimal::ZERO);
    }

    #[test]
    fn swimming_invariants(
        action in 0u32..100_000,
        duration in duration_strategy(),
        weight in weight_strategy(),
        pool in 10i64..=50,
        laps in 0u32..500,
    ) {
        let workout = WorkoutFactory::create(
            "SWM",
            &[
                Decimal::from(action),
                duration,
                weight,
                Decimal::from(pool),
                Decimal::from(laps),
            ],
        ).unwrap();
        assert_nonnegative_and_pure(workout.as_ref());

        // Pool-based speed, so swimming calories stay positive too
        assert!(workout.spent_calories().unwrap() > Decimal::ZERO);
    }

    #[test]
    fn wrong_arity_always_fails(
        code_idx in 0usize..3,
        len in 0usize..8,
    ) {
        let codes = ["RUN", "WLK", "SWM"];
        let expected = [3usize, 4, 5];
        prop_assume!(len != expected[code_idx]);

        let data = vec![Decimal::ONE; len];
        let err = WorkoutFactory::create(codes[code_idx], &data).unwrap_err();
        let is_field_count = matches!(err, PacketError::FieldCount { .. });
        prop_assert!(is_field_count);
    }
}
