//! Three stacked panels sharing one date axis: the raw series, its trailing
//! moving average, and the raw series again with drought/flood shading.
//!
//! Output format follows the file extension: `.svg` goes through the SVG
//! backend, anything else is rasterized to PNG.

use chrono::NaiveDate;
use log::info;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use soil_core::{
    config::Thresholds,
    error::{Result, SoilError},
};
use soil_data::{
    present_segments,
    thresholds::{drought_runs, flood_runs},
    EnrichedDataset,
};
use soil_utils::dates::format_date;
use std::{ops::Range, path::Path};

pub const DATE_LABEL: &str = "Date";
pub const MOISTURE_LABEL: &str = "Soil Moisture (%)";
pub const RAW_TITLE: &str = "Daily Soil Moisture Levels Over Time";
pub const RAW_LEGEND: &str = "Daily Soil Moisture";
pub const THRESHOLD_TITLE: &str = "Drought and Flood Analysis";

const FONT: &str = "sans-serif";
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const DROUGHT_RED: RGBColor = RGBColor(255, 0, 0);
const FLOOD_GREEN: RGBColor = RGBColor(0, 128, 0);
const AREA_ALPHA: f64 = 0.3;
const MARKER_SIZE: u32 = 3;

type DateChart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<RangedDate<NaiveDate>, RangedCoordf64>>;
type DrawResult<T, DB> =
    std::result::Result<T, DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Axis extents shared by all three panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBounds {
    pub dates: Range<NaiveDate>,
    pub moisture: Range<f64>,
}

impl ChartBounds {
    /// The date axis spans the first to the last dated reading; the moisture
    /// axis always covers 0..100 and grows to fit outliers.
    pub fn from_enriched(enriched: &EnrichedDataset) -> Result<ChartBounds> {
        let raw = enriched.moisture_points();
        if !raw.iter().any(|(_, v)| v.is_some()) {
            return Err(SoilError::NoPlottableReadings);
        }
        let (first, last) = match (raw.first(), raw.last()) {
            (Some(first), Some(last)) => (first.0, last.0),
            _ => return Err(SoilError::NoPlottableReadings),
        };
        let dates = if first == last {
            first.pred_opt().unwrap_or(first)..last.succ_opt().unwrap_or(last)
        } else {
            first..last
        };

        let (min, max) = raw
            .iter()
            .filter_map(|(_, v)| *v)
            .chain(enriched.average_points().iter().filter_map(|(_, v)| *v))
            .fold((0.0_f64, 100.0_f64), |(min, max), v| (min.min(v), max.max(v)));

        Ok(ChartBounds {
            dates,
            moisture: min..max,
        })
    }
}

/// Render the report to `path`, replacing any existing file.
pub fn write_chart<P: AsRef<Path>>(
    enriched: &EnrichedDataset,
    thresholds: &Thresholds,
    size: (u32, u32),
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let bounds = ChartBounds::from_enriched(enriched)?;
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_report(&root, enriched, thresholds, &bounds).map_err(render_error)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_report(&root, enriched, thresholds, &bounds).map_err(render_error)?;
    }
    info!(
        "Chart ({}x{}) written to {}",
        size.0,
        size.1,
        path.display()
    );
    Ok(())
}

fn render_error<E: std::fmt::Display>(e: E) -> SoilError {
    SoilError::Render(e.to_string())
}

/// Draw all three panels onto any plotters backend.
pub fn draw_report<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    enriched: &EnrichedDataset,
    thresholds: &Thresholds,
    bounds: &ChartBounds,
) -> DrawResult<(), DB> {
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));
    let raw = enriched.moisture_points();

    // panel 1: raw series with markers
    let mut chart = build_panel(&panels[0], RAW_TITLE, bounds)?;
    let labeled = draw_line(&mut chart, &raw, BLUE, MARKER_SIZE, RAW_LEGEND)?;
    draw_legend(&mut chart, labeled)?;

    // panel 2: moving average
    let average_title = format!(
        "{}-Day Moving Average of Soil Moisture Levels",
        enriched.window
    );
    let average_legend = format!("{}-Day Moving Average", enriched.window);
    let mut chart = build_panel(&panels[1], &average_title, bounds)?;
    let labeled = draw_line(
        &mut chart,
        &enriched.average_points(),
        ORANGE,
        0,
        &average_legend,
    )?;
    draw_legend(&mut chart, labeled)?;

    // panel 3: shading under the curve, then the curve on top
    let mut chart = build_panel(&panels[2], THRESHOLD_TITLE, bounds)?;
    let drought_label = format!("Drought Condition (< {}%)", thresholds.drought);
    let flood_label = format!("Flood Condition (> {}%)", thresholds.flood);
    let labeled_drought = draw_runs(
        &mut chart,
        drought_runs(&raw, thresholds),
        DROUGHT_RED,
        &drought_label,
    )?;
    let labeled_flood = draw_runs(
        &mut chart,
        flood_runs(&raw, thresholds),
        FLOOD_GREEN,
        &flood_label,
    )?;
    let labeled_line = draw_line(&mut chart, &raw, BLUE, 0, RAW_LEGEND)?;
    draw_legend(&mut chart, labeled_drought || labeled_flood || labeled_line)?;

    root.present()?;
    Ok(())
}

fn build_panel<'a, DB: DrawingBackend + 'a>(
    area: &'a DrawingArea<DB, Shift>,
    title: &str,
    bounds: &ChartBounds,
) -> DrawResult<DateChart<'a, DB>, DB> {
    let ranged_date: RangedDate<NaiveDate> = bounds.dates.clone().into();
    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(ranged_date, bounds.moisture.clone())?;
    chart
        .configure_mesh()
        .x_desc(DATE_LABEL)
        .y_desc(MOISTURE_LABEL)
        .x_labels(8)
        .x_label_formatter(&|d: &NaiveDate| format_date(d))
        .light_line_style(BLACK.mix(0.08))
        .draw()?;
    Ok(chart)
}

/// Draw a line per stretch of present values; only the first stretch gets
/// the legend entry. Returns whether anything was labeled.
fn draw_line<'a, DB: DrawingBackend + 'a>(
    chart: &mut DateChart<'a, DB>,
    points: &[(NaiveDate, Option<f64>)],
    color: RGBColor,
    point_size: u32,
    label: &str,
) -> DrawResult<bool, DB> {
    let mut labeled = false;
    for segment in present_segments(points) {
        let series = LineSeries::new(segment, color.stroke_width(2)).point_size(point_size);
        let anno = chart.draw_series(series)?;
        if !labeled {
            anno.label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            labeled = true;
        }
    }
    Ok(labeled)
}

fn draw_runs<'a, DB: DrawingBackend + 'a>(
    chart: &mut DateChart<'a, DB>,
    runs: Vec<Vec<(NaiveDate, f64)>>,
    color: RGBColor,
    label: &str,
) -> DrawResult<bool, DB> {
    let style = color.mix(AREA_ALPHA);
    let mut labeled = false;
    for run in runs {
        let anno = chart.draw_series(AreaSeries::new(run, 0.0, style))?;
        if !labeled {
            anno.label(label).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], style.filled())
            });
            labeled = true;
        }
    }
    Ok(labeled)
}

fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut DateChart<'a, DB>,
    labeled: bool,
) -> DrawResult<(), DB> {
    if !labeled {
        return Ok(());
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
}
