//! MatCalc-rs library: application logic for the matrix calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
