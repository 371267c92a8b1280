//! Command implementations for the soil moisture report CLI.
//!
//! Provides a `report` subcommand that renders the three-panel chart and a
//! `summary` subcommand that prints the overall moisture condition.

use clap::Subcommand;
use soil_core::config::{
    ReportConfig, Thresholds, DEFAULT_DROUGHT_THRESHOLD, DEFAULT_FLOOD_THRESHOLD,
    DEFAULT_HEIGHT, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_WIDTH, DEFAULT_WINDOW,
};
use std::path::PathBuf;

pub mod report;
pub mod summary;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render raw readings, moving average and drought/flood shading to an image
    Report {
        /// CSV with `Date` and `SoilMoisture` columns
        #[arg(short = 'i', long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Destination image (PNG, or SVG when the extension is .svg)
        #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Moving-average width in samples
        #[arg(short = 'w', long, default_value_t = DEFAULT_WINDOW)]
        window: usize,

        /// Readings strictly below this percentage count as drought
        #[arg(long, default_value_t = DEFAULT_DROUGHT_THRESHOLD)]
        drought: f64,

        /// Readings strictly above this percentage count as flood
        #[arg(long, default_value_t = DEFAULT_FLOOD_THRESHOLD)]
        flood: f64,

        /// Image width in pixels
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,

        /// Only write the image; do not open it in a viewer
        #[arg(long)]
        no_show: bool,
    },

    /// Print the average moisture, its condition and a suggested action
    Summary {
        /// CSV with `Date` and `SoilMoisture` columns
        #[arg(short = 'i', long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Readings strictly below this percentage count as drought
        #[arg(long, default_value_t = DEFAULT_DROUGHT_THRESHOLD)]
        drought: f64,

        /// Readings strictly above this percentage count as flood
        #[arg(long, default_value_t = DEFAULT_FLOOD_THRESHOLD)]
        flood: f64,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report {
            input,
            output,
            window,
            drought,
            flood,
            width,
            height,
            no_show,
        } => {
            let config = ReportConfig {
                input_path: input,
                output_path: output,
                window,
                thresholds: Thresholds { drought, flood },
                width,
                height,
                show: !no_show,
            };
            report::run_report(&config).map(|_| ())
        }
        Command::Summary {
            input,
            drought,
            flood,
        } => {
            let thresholds = Thresholds::new(drought, flood)?;
            let summary = summary::run_summary(&input, &thresholds)?;
            println!("{summary}");
            Ok(())
        }
    }
}
