//! Chart rendering for soil moisture reports.

pub mod display;
pub mod render;
