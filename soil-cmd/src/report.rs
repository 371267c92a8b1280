//! Render the soil moisture chart from the exporter's CSV.

use anyhow::Context;
use log::info;
use soil_chart::{display, render};
use soil_core::{config::ReportConfig, reading::Dataset};
use soil_data::{summary::MoistureSummary, EnrichedDataset};

/// Run the full report: load, sort, smooth, render, then optionally show.
///
/// Returns the whole-series summary so callers can reuse it.
pub fn run_report(config: &ReportConfig) -> anyhow::Result<MoistureSummary> {
    config.validate()?;

    let dataset = Dataset::from_path(&config.input_path).with_context(|| {
        format!(
            "Failed to load soil moisture readings from {}",
            config.input_path.display()
        )
    })?;

    let summary = MoistureSummary::from_dataset(&dataset, &config.thresholds);
    if let (Some(avg), Some(condition)) = (summary.average, summary.condition) {
        info!("Average soil moisture {:.2}%: {}", avg, condition);
        info!("Suggested action: {}", condition.suggested_action());
    }

    let enriched = EnrichedDataset::build(dataset, config.window)?;
    render::write_chart(
        &enriched,
        &config.thresholds,
        (config.width, config.height),
        &config.output_path,
    )
    .with_context(|| format!("Failed to write chart to {}", config.output_path.display()))?;

    if config.show {
        display::present(&config.output_path);
    }

    info!("Report complete. Output: {}", config.output_path.display());
    Ok(summary)
}
