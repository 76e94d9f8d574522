//! EZ-diffusion simulate-and-recover.
//!
//! Monte Carlo validation of the EZ-diffusion model's parameter recovery:
//! draw true parameters, compute model-predicted summary statistics, inject
//! finite-sample noise, invert the model, and record per-trial bias and
//! squared error as a function of sample size.
//!
//! - [`model`]: Forward/inverse EZ-diffusion equations
//! - [`sampler`]: True-parameter draws
//! - [`observation`]: Finite-sample observation noise
//! - [`simulation`]: Trial pipeline, batch driver, aggregate statistics
//! - [`output`]: Result-table persistence

pub mod constants;
pub mod model;
pub mod observation;
pub mod output;
pub mod sampler;
pub mod simulation;
pub mod types;

// Re-export commonly used items
pub use model::{forward_statistics, invert_statistics};
pub use observation::simulate_observed;
pub use sampler::sample_parameters;
pub use simulation::{
    aggregate_statistics, run_experiment, run_trial, save_statistics, ExperimentConfig,
    ExperimentResult, RecoveryStatistics,
};
pub use types::{
    DiffusionParams, ObservedStats, PredictedStats, RecoveryRecord, SkipReason,
};
