//! Chronological ordering of readings.

use log::debug;
use soil_core::reading::Dataset;

/// Stable-sort readings by date, ascending.
///
/// Readings without a date go after every dated reading. Equal dates, and
/// the undated tail, keep their relative input order. Sorting an already
/// sorted dataset leaves it unchanged.
pub fn normalize(dataset: &mut Dataset) {
    dataset.0.sort_by_key(|r| (r.date.is_none(), r.date));
    debug!("Normalized {} readings into date order", dataset.len());
}

/// True when dates never decrease and no dated reading follows an undated one.
pub fn is_normalized(dataset: &Dataset) -> bool {
    dataset
        .readings()
        .windows(2)
        .all(|w| (w[0].date.is_none(), w[0].date) <= (w[1].date.is_none(), w[1].date))
}
