//! Whole-series moisture summary.

use crate::thresholds::Condition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use soil_core::{config::Thresholds, reading::Dataset};
use soil_utils::dates::format_date;
use std::fmt;

/// Overall statistics for a dataset, classified against the thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureSummary {
    pub total_readings: usize,
    pub dated_readings: usize,
    pub valued_readings: usize,
    /// Mean over present moisture values; `None` when there are none.
    pub average: Option<f64>,
    pub drought_readings: usize,
    pub flood_readings: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub condition: Option<Condition>,
}

impl MoistureSummary {
    pub fn from_dataset(dataset: &Dataset, thresholds: &Thresholds) -> MoistureSummary {
        let values: Vec<f64> = dataset.iter().filter_map(|r| r.soil_moisture).collect();
        let average = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };
        let dates = dataset.iter().filter_map(|r| r.date);
        MoistureSummary {
            total_readings: dataset.len(),
            dated_readings: dataset.len() - dataset.missing_date_count(),
            valued_readings: values.len(),
            average,
            drought_readings: values.iter().filter(|v| thresholds.is_drought(**v)).count(),
            flood_readings: values.iter().filter(|v| thresholds.is_flood(**v)).count(),
            first_date: dates.clone().min(),
            last_date: dates.max(),
            condition: average.map(|avg| Condition::classify(avg, thresholds)),
        }
    }
}

impl fmt::Display for MoistureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Readings: {} ({} dated, {} with moisture)",
            self.total_readings, self.dated_readings, self.valued_readings
        )?;
        if let (Some(first), Some(last)) = (self.first_date, self.last_date) {
            writeln!(f, "Period: {} to {}", format_date(&first), format_date(&last))?;
        }
        writeln!(
            f,
            "Drought readings: {}, flood readings: {}",
            self.drought_readings, self.flood_readings
        )?;
        match (self.average, self.condition) {
            (Some(avg), Some(condition)) => {
                writeln!(f, "Average Soil Moisture: {avg:.2}%")?;
                writeln!(f, "Condition Analysis: {condition}")?;
                write!(f, "Suggested Action: {}", condition.suggested_action())
            }
            _ => write!(f, "Average Soil Moisture: no data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use soil_core::reading::Reading;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summary_counts_and_average() {
        let dataset = Dataset(vec![
            Reading::new(0, Some(ymd(2023, 1, 3)), Some(10.0)),
            Reading::new(1, Some(ymd(2023, 1, 1)), Some(90.0)),
            Reading::new(2, None, Some(50.0)),
            Reading::new(3, Some(ymd(2023, 1, 2)), None),
        ]);
        let summary = MoistureSummary::from_dataset(&dataset, &Thresholds::default());
        assert_eq!(summary.total_readings, 4);
        assert_eq!(summary.dated_readings, 3);
        assert_eq!(summary.valued_readings, 3);
        assert_relative_eq!(summary.average.unwrap(), 50.0);
        assert_eq!(summary.drought_readings, 1);
        assert_eq!(summary.flood_readings, 1);
        assert_eq!(summary.first_date, Some(ymd(2023, 1, 1)));
        assert_eq!(summary.last_date, Some(ymd(2023, 1, 3)));
        assert_eq!(summary.condition, Some(Condition::Normal));
    }

    #[test]
    fn test_summary_drought_average() {
        let dataset: Dataset = (0..5)
            .map(|i| Reading::new(i, Some(ymd(2023, 2, 1 + i as u32)), Some(12.0)))
            .collect();
        let summary = MoistureSummary::from_dataset(&dataset, &Thresholds::default());
        assert_eq!(summary.condition, Some(Condition::Drought));
        let text = summary.to_string();
        assert!(text.contains("Average Soil Moisture: 12.00%"));
        assert!(text.contains("Condition Analysis: Drought Condition Detected!"));
        assert!(text.contains("Suggested Action: Implement irrigation strategies"));
        assert!(text.contains("Period: 2023-02-01 to 2023-02-05"));
    }

    #[test]
    fn test_summary_without_values() {
        let dataset = Dataset(vec![Reading::new(0, Some(ymd(2023, 1, 1)), None)]);
        let summary = MoistureSummary::from_dataset(&dataset, &Thresholds::default());
        assert_eq!(summary.average, None);
        assert_eq!(summary.condition, None);
        assert!(summary.to_string().ends_with("Average Soil Moisture: no data"));
    }
}
