//! Terminal rendering of workout summaries
//!
//! The canonical one-line form lives on `WorkoutSummary`'s `Display`
//! impl; this module adds a table view for batches of summaries.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::WorkoutSummary;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Workout")]
    workout: &'static str,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Avg speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories (kcal)")]
    calories: String,
}

impl From<&WorkoutSummary> for SummaryRow {
    fn from(summary: &WorkoutSummary) -> Self {
        Self {
            workout: summary.workout.name(),
            duration: format!("{:.3}", summary.duration_h),
            distance: format!("{:.3}", summary.distance_km),
            speed: format!("{:.3}", summary.mean_speed_kmh),
            calories: format!("{:.3}", summary.calories_kcal),
        }
    }
}

/// Render a batch of summaries as a terminal table
pub fn summary_table(summaries: &[WorkoutSummary]) -> String {
    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
    Table::new(rows).with(Style::modern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_table_contains_formatted_values() {
        let summaries = vec![WorkoutSummary {
            workout: WorkoutKind::Running,
            duration_h: dec!(1),
            distance_km: dec!(9.75),
            mean_speed_kmh: dec!(9.75),
            calories_kcal: dec!(699.75),
        }];
        let table = summary_table(&summaries);
        assert!(table.contains("Running"));
        assert!(table.contains("9.750"));
        assert!(table.contains("699.750"));
    }

    #[test]
    fn test_empty_table_has_no_rows() {
        let table = summary_table(&[]);
        assert!(!table.contains("Running"));
    }
}
