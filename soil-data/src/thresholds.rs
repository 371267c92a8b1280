//! Drought and flood classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use soil_core::config::Thresholds;
use std::fmt;

/// Moisture state of a single value against the thresholds.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Condition {
    Drought,
    Normal,
    Flood,
}

impl Condition {
    pub fn classify(value: f64, thresholds: &Thresholds) -> Condition {
        if thresholds.is_drought(value) {
            Condition::Drought
        } else if thresholds.is_flood(value) {
            Condition::Flood
        } else {
            Condition::Normal
        }
    }

    pub fn suggested_action(&self) -> &'static str {
        match self {
            Condition::Drought => "Implement irrigation strategies to conserve water.",
            Condition::Flood => "Implement drainage solutions to avoid crop damage.",
            Condition::Normal => "Maintain regular crop monitoring.",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::Drought => "Drought Condition Detected!",
            Condition::Flood => "Flood Condition Detected!",
            Condition::Normal => "Normal Soil Moisture Levels.",
        };
        write!(f, "{s}")
    }
}

/// Maximal runs of consecutive points whose value satisfies `predicate`.
///
/// A point with no value, or one failing the predicate, closes the current
/// run. Each run is drawn as an area from the curve down to zero.
pub fn threshold_runs<F>(
    points: &[(NaiveDate, Option<f64>)],
    predicate: F,
) -> Vec<Vec<(NaiveDate, f64)>>
where
    F: Fn(f64) -> bool,
{
    let mut runs = Vec::new();
    let mut current: Vec<(NaiveDate, f64)> = Vec::new();
    for (date, value) in points {
        match value {
            Some(v) if predicate(*v) => current.push((*date, *v)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

pub fn drought_runs(
    points: &[(NaiveDate, Option<f64>)],
    thresholds: &Thresholds,
) -> Vec<Vec<(NaiveDate, f64)>> {
    threshold_runs(points, |v| thresholds.is_drought(v))
}

pub fn flood_runs(
    points: &[(NaiveDate, Option<f64>)],
    thresholds: &Thresholds,
) -> Vec<Vec<(NaiveDate, f64)>> {
    threshold_runs(points, |v| thresholds.is_flood(v))
}
