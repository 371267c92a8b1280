//! Whole-series moisture summary without rendering.

use anyhow::Context;
use log::info;
use soil_core::{config::Thresholds, reading::Dataset};
use soil_data::summary::MoistureSummary;
use std::path::Path;

pub fn run_summary(input: &Path, thresholds: &Thresholds) -> anyhow::Result<MoistureSummary> {
    let dataset = Dataset::from_path(input).with_context(|| {
        format!(
            "Failed to load soil moisture readings from {}",
            input.display()
        )
    })?;
    let summary = MoistureSummary::from_dataset(&dataset, thresholds);
    info!(
        "Summarized {} readings from {}",
        summary.total_readings,
        input.display()
    );
    Ok(summary)
}
