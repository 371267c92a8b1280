//! Data processing for soil moisture readings.
//!
//! This crate turns a loaded [`Dataset`] into the sorted, smoothed series
//! the chart draws, and into the overall condition summary.

pub mod moving_average;
pub mod normalize;
pub mod summary;
pub mod thresholds;

use chrono::NaiveDate;
use log::info;
use soil_core::{error::Result, reading::Dataset};

/// A normalized dataset together with its trailing moving average.
///
/// `moving_average[i]` belongs to `dataset.0[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedDataset {
    pub dataset: Dataset,
    pub moving_average: Vec<Option<f64>>,
    pub window: usize,
}

impl EnrichedDataset {
    /// Sort the readings chronologically and derive the moving average.
    pub fn build(mut dataset: Dataset, window: usize) -> Result<Self> {
        normalize::normalize(&mut dataset);
        let moving_average = moving_average::trailing_mean(&dataset.moisture(), window)?;
        let defined = moving_average.iter().filter(|v| v.is_some()).count();
        info!(
            "Derived {}-sample moving average: {} of {} positions defined",
            window,
            defined,
            moving_average.len()
        );
        Ok(EnrichedDataset {
            dataset,
            moving_average,
            window,
        })
    }

    /// Raw moisture against date, skipping rows without a date.
    pub fn moisture_points(&self) -> Vec<(NaiveDate, Option<f64>)> {
        self.dataset
            .iter()
            .filter_map(|r| r.date.map(|d| (d, r.soil_moisture)))
            .collect()
    }

    /// Moving average against date, skipping rows without a date.
    pub fn average_points(&self) -> Vec<(NaiveDate, Option<f64>)> {
        self.dataset
            .iter()
            .zip(self.moving_average.iter())
            .filter_map(|(r, avg)| r.date.map(|d| (d, *avg)))
            .collect()
    }
}

/// Split a series into the contiguous stretches of present values.
///
/// Lines are drawn per segment so a missing value leaves a gap instead of
/// bridging over it.
pub fn present_segments(points: &[(NaiveDate, Option<f64>)]) -> Vec<Vec<(NaiveDate, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(NaiveDate, f64)> = Vec::new();
    for (date, value) in points {
        match value {
            Some(v) => current.push((*date, *v)),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
