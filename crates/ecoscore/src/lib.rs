//! Core library for the EcoScore carbon footprint survey: configuration,
//! telemetry, and the survey scoring pipeline.

pub mod config;
pub mod error;
pub mod survey;
pub mod telemetry;
