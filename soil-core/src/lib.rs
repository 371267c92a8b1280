//! Core types for soil moisture reports: readings, datasets, configuration
//! and the shared error type.

pub mod config;
pub mod error;
pub mod reading;
