//! Trailing moving average over a series with gaps.

use soil_core::error::{Result, SoilError};

/// Mean of each value and the `window - 1` values before it.
///
/// Position `i` is `None` when `i < window - 1` or when any value inside
/// the window is missing.
pub fn trailing_mean(values: &[Option<f64>], window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(SoilError::InvalidWindow(window));
    }
    let result = (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            values[i + 1 - window..=i]
                .iter()
                .copied()
                .sum::<Option<f64>>()
                .map(|total| total / window as f64)
        })
        .collect();
    Ok(result)
}
