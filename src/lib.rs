//! HQ Insight - Fortune 500 headquarters dashboard
//!
//! Loads the headquarters CSV, cleans it into a typed table and renders one
//! chart per sidebar page.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod gui;
pub mod stats;
