//! Monte Carlo simulate-and-recover driver.
//!
//! Runs the four-stage pipeline per trial: draw a true parameter triple,
//! compute predicted statistics, perturb them for a sample of size N,
//! invert back to an estimate, and record per-parameter bias and squared
//! error. Degenerate trials are dropped (no row), but counted per reason.
//!
//! Trials are independent, so the driver runs them in parallel; each
//! trial gets its own seed-offset RNG stream, which keeps the output
//! identical for a given seed regardless of thread count.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use crate::constants::{DEFAULT_SEED, SAMPLE_SIZES, TRIALS_PER_SIZE};
use crate::model::{forward_statistics, invert_statistics};
use crate::observation::simulate_observed;
use crate::sampler::sample_parameters;
use crate::types::{RecoveryRecord, SkipReason};

/// Experiment grid: which sample sizes, how many trials each, which seed.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Sample sizes, in output order.
    pub sample_sizes: Vec<u64>,
    /// Trials per sample size.
    pub trials_per_size: usize,
    /// Base RNG seed; trial i of the whole grid uses seed + i.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sample_sizes: SAMPLE_SIZES.to_vec(),
            trials_per_size: TRIALS_PER_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Skipped-trial tally, per reason.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SkipCounts {
    pub insufficient_sample: u64,
    pub boundary_accuracy: u64,
    pub non_positive_variance: u64,
    pub negative_radicand: u64,
}

impl SkipCounts {
    fn record(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::InsufficientSampleSize(_) => self.insufficient_sample += 1,
            SkipReason::BoundaryAccuracy(_) => self.boundary_accuracy += 1,
            SkipReason::NonPositiveVariance(_) => self.non_positive_variance += 1,
            SkipReason::NegativeRadicand(_) => self.negative_radicand += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.insufficient_sample
            + self.boundary_accuracy
            + self.non_positive_variance
            + self.negative_radicand
    }
}

/// Results of a full experiment run.
pub struct ExperimentResult {
    /// One record per successful trial, grouped by sample size in
    /// configured order, then by trial index.
    pub records: Vec<RecoveryRecord>,
    /// How many trials were attempted (sizes × trials_per_size).
    pub trials_attempted: u64,
    /// Dropped trials, tallied per reason.
    pub skips: SkipCounts,
    pub elapsed: std::time::Duration,
}

/// Run one trial of the pipeline for sample size `n`.
///
/// The caller owns the RNG so trials can draw from independent streams.
pub fn run_trial(n: u64, rng: &mut SmallRng) -> Result<RecoveryRecord, SkipReason> {
    let truth = sample_parameters(rng);
    let pred = forward_statistics(&truth);
    let obs = simulate_observed(&pred, n, rng)?;
    let est = invert_statistics(&obs)?;

    let bias_a = est.boundary_separation - truth.boundary_separation;
    let bias_v = est.drift_rate - truth.drift_rate;
    let bias_t = est.nondecision_time - truth.nondecision_time;

    Ok(RecoveryRecord {
        n,
        bias_a,
        bias_v,
        bias_t,
        se_a: bias_a * bias_a,
        se_v: bias_v * bias_v,
        se_t: bias_t * bias_t,
    })
}

/// Run `trials` trials at sample size `n` in parallel, preserving trial
/// order. Trial i uses the stream seeded with `base_seed + i`.
pub fn run_cell(
    n: u64,
    trials: usize,
    base_seed: u64,
) -> Vec<Result<RecoveryRecord, SkipReason>> {
    (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            run_trial(n, &mut rng)
        })
        .collect()
}

/// Run the full grid: every configured sample size × trials_per_size.
///
/// Skipped trials leave no record; the tally in the result is the only
/// trace they existed.
pub fn run_experiment(config: &ExperimentConfig) -> ExperimentResult {
    let start = Instant::now();

    let mut records = Vec::with_capacity(config.sample_sizes.len() * config.trials_per_size);
    let mut skips = SkipCounts::default();

    for (group, &n) in config.sample_sizes.iter().enumerate() {
        let base_seed = config
            .seed
            .wrapping_add((group * config.trials_per_size) as u64);
        for outcome in run_cell(n, config.trials_per_size, base_seed) {
            match outcome {
                Ok(record) => records.push(record),
                Err(reason) => skips.record(&reason),
            }
        }
    }

    ExperimentResult {
        records,
        trials_attempted: (config.sample_sizes.len() * config.trials_per_size) as u64,
        skips,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_trial_deterministic() {
        let mut rng1 = SmallRng::seed_from_u64(123);
        let mut rng2 = SmallRng::seed_from_u64(123);
        let r1 = run_trial(40, &mut rng1);
        let r2 = run_trial(40, &mut rng2);
        match (r1, r2) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.bias_a, b.bias_a);
                assert_eq!(a.bias_v, b.bias_v);
                assert_eq!(a.bias_t, b.bias_t);
            }
            (Err(a), Err(b)) => assert_eq!(a, b),
            _ => panic!("same seed diverged"),
        }
    }

    #[test]
    fn test_run_trial_skips_small_n() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(
            run_trial(1, &mut rng),
            Err(SkipReason::InsufficientSampleSize(1))
        );
    }

    #[test]
    fn test_squared_error_is_bias_squared() {
        let mut produced = 0;
        for i in 0..200u64 {
            let mut rng = SmallRng::seed_from_u64(42u64.wrapping_add(i));
            if let Ok(rec) = run_trial(10, &mut rng) {
                assert!((rec.se_a - rec.bias_a * rec.bias_a).abs() < 1e-12);
                assert!((rec.se_v - rec.bias_v * rec.bias_v).abs() < 1e-12);
                assert!((rec.se_t - rec.bias_t * rec.bias_t).abs() < 1e-12);
                produced += 1;
            }
        }
        assert!(produced > 0);
    }

    #[test]
    fn test_experiment_output_shape() {
        let config = ExperimentConfig {
            sample_sizes: vec![10, 40, 4000],
            trials_per_size: 100,
            seed: 42,
        };
        let result = run_experiment(&config);

        assert_eq!(result.trials_attempted, 300);
        assert!(result.records.len() <= 300);
        assert_eq!(
            result.records.len() as u64 + result.skips.total(),
            result.trials_attempted
        );
        for rec in &result.records {
            assert!([10, 40, 4000].contains(&rec.n));
            assert!(rec.bias_a.is_finite());
            assert!(rec.bias_v.is_finite());
            assert!(rec.bias_t.is_finite());
        }
        // Grouped by sample size in configured order.
        let order = [10u64, 40, 4000];
        let mut group = 0usize;
        for rec in &result.records {
            while group < order.len() && order[group] != rec.n {
                group += 1;
            }
            assert!(group < order.len(), "records not grouped by sample size");
        }
    }

    #[test]
    fn test_experiment_deterministic() {
        let config = ExperimentConfig {
            sample_sizes: vec![10, 40],
            trials_per_size: 50,
            seed: 7,
        };
        let r1 = run_experiment(&config);
        let r2 = run_experiment(&config);
        assert_eq!(r1.records.len(), r2.records.len());
        for (a, b) in r1.records.iter().zip(r2.records.iter()) {
            assert_eq!(a.n, b.n);
            assert_eq!(a.bias_a, b.bias_a);
            assert_eq!(a.bias_v, b.bias_v);
            assert_eq!(a.bias_t, b.bias_t);
        }
    }

    #[test]
    fn test_cell_skips_all_trials_below_min_n() {
        let outcomes = run_cell(1, 20, 42);
        assert!(outcomes
            .iter()
            .all(|r| *r == Err(SkipReason::InsufficientSampleSize(1))));
    }

    #[test]
    fn test_estimate_variance_shrinks_with_n() {
        // Law of large numbers: at fixed true parameters, the spread of
        // the drift-rate bias shrinks as N grows 10 → 40 → 4000.
        use crate::types::DiffusionParams;

        let truth = DiffusionParams {
            boundary_separation: 1.0,
            drift_rate: 1.0,
            nondecision_time: 0.3,
        };
        let pred = forward_statistics(&truth);

        let bias_variance = |n: u64| -> f64 {
            let mut biases = Vec::new();
            for i in 0..400u64 {
                let mut rng = SmallRng::seed_from_u64(1000 + i);
                if let Ok(obs) = simulate_observed(&pred, n, &mut rng) {
                    if let Ok(est) = invert_statistics(&obs) {
                        biases.push(est.drift_rate - truth.drift_rate);
                    }
                }
            }
            assert!(biases.len() > 100, "too many skips at n={}", n);
            let mean = biases.iter().sum::<f64>() / biases.len() as f64;
            biases.iter().map(|b| (b - mean).powi(2)).sum::<f64>() / biases.len() as f64
        };

        let var10 = bias_variance(10);
        let var40 = bias_variance(40);
        let var4000 = bias_variance(4000);
        assert!(var10 > var40, "{} vs {}", var10, var40);
        assert!(var40 > var4000, "{} vs {}", var40, var4000);
    }
}
