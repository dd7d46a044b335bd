//! Sensor packet decoding and workout construction
//!
//! Maps a sensor type code to the matching workout kind, validates the
//! packet's field arity and value ranges, and constructs the workout.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::PacketError;
use crate::models::{SensorPacket, WorkoutKind};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::Walking;
use crate::workout::Workout;

/// Builds workouts from raw sensor readings
pub struct WorkoutFactory;

impl WorkoutFactory {
    /// Decode a type code and positional field list into a workout
    ///
    /// Field layout: action, duration (h), weight (kg), then height
    /// (cm) for walking or pool length (m) and lap count for swimming.
    pub fn create(code: &str, data: &[Decimal]) -> Result<Box<dyn Workout>, PacketError> {
        let kind = WorkoutKind::from_code(code)
            .ok_or_else(|| PacketError::UnknownWorkoutType {
                code: code.to_string(),
            })?;

        let expected = kind.field_count();
        if data.len() != expected {
            return Err(PacketError::FieldCount {
                workout: kind.name(),
                expected,
                actual: data.len(),
            });
        }

        let action = decode_count(data[0], "action")?;
        let duration_h = decode_positive(data[1], "duration")?;
        let weight_kg = decode_positive(data[2], "weight")?;

        let workout: Box<dyn Workout> = match kind {
            WorkoutKind::Running => Box::new(Running::new(action, duration_h, weight_kg)),
            WorkoutKind::Walking => {
                let height_cm = decode_positive(data[3], "height")?;
                Box::new(Walking::new(action, duration_h, weight_kg, height_cm))
            }
            WorkoutKind::Swimming => {
                let pool_length_m = decode_positive(data[3], "pool_length")?;
                let lap_count = decode_count(data[4], "lap_count")?;
                Box::new(Swimming::new(
                    action,
                    duration_h,
                    weight_kg,
                    pool_length_m,
                    lap_count,
                ))
            }
        };

        debug!(code, fields = data.len(), "decoded sensor packet");
        Ok(workout)
    }

    /// Decode a deserialized sensor packet
    pub fn from_packet(packet: &SensorPacket) -> Result<Box<dyn Workout>, PacketError> {
        Self::create(&packet.workout_type, &packet.data)
    }
}

/// Decode a count field: a non-negative integer value
fn decode_count(value: Decimal, field: &'static str) -> Result<u32, PacketError> {
    if value.is_sign_negative() || !value.fract().is_zero() {
        return Err(PacketError::InvalidField {
            field,
            reason: format!("expected a non-negative integer, got {}", value),
        });
    }
    value.to_u32().ok_or_else(|| PacketError::InvalidField {
        field,
        reason: format!("count {} is out of range", value),
    })
}

/// Decode a physical quantity that must be strictly positive
fn decode_positive(value: Decimal, field: &'static str) -> Result<Decimal, PacketError> {
    if value <= Decimal::ZERO {
        return Err(PacketError::InvalidField {
            field,
            reason: format!("must be positive, got {}", value),
        });
    }
    Ok(value)
}
