//! Data layer for fiscal report views: extracts numbers from display
//! amounts, looks up tax entries by label and estimates yearly costs.

pub mod core;
