//! Trial pipeline, batch driver, and aggregate statistics.
//!
//! - [`engine`]: Core pipeline (sample → predict → observe → invert) and
//!   the parallel Monte Carlo driver
//! - [`statistics`]: Per-sample-size aggregate statistics from recovery
//!   records

pub mod engine;
pub mod statistics;

// Re-export commonly used items
pub use engine::{
    run_cell, run_experiment, run_trial, ExperimentConfig, ExperimentResult, SkipCounts,
};
pub use statistics::{aggregate_statistics, save_statistics, GroupStatistics, RecoveryStatistics};
