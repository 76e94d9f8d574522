//! Core data types for the simulate-and-recover pipeline.

use std::fmt;

/// EZ-diffusion parameter triple (a, v, t).
///
/// Serves both as the true configuration drawn by the sampler and as the
/// estimate recovered by the inverse model — the two are shape-identical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffusionParams {
    /// Boundary separation (a), > 0.
    pub boundary_separation: f64,
    /// Drift rate (v), > 0 for true parameters; estimates carry the
    /// sign implied by observed accuracy.
    pub drift_rate: f64,
    /// Nondecision time (t), > 0.
    pub nondecision_time: f64,
}

/// Model-predicted summary statistics for a parameter triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictedStats {
    /// Expected accuracy R, in (0, 1). In (0.5, 1) for positive drift.
    pub accuracy: f64,
    /// Expected mean response time M, > nondecision time.
    pub mean_rt: f64,
    /// Expected response-time variance V, > 0.
    pub variance_rt: f64,
}

/// Noisy realization of predicted statistics for a finite sample of size N.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservedStats {
    /// Observed accuracy: binomial proportion, may hit 0 or 1 exactly.
    pub accuracy: f64,
    /// Observed mean response time.
    pub mean_rt: f64,
    /// Observed response-time variance, chi-squared-family noise.
    pub variance_rt: f64,
}

/// One row of the result table: recovery error for a successful trial.
/// `se_*` is always `bias_*` squared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecoveryRecord {
    pub n: u64,
    pub bias_a: f64,
    pub bias_v: f64,
    pub bias_t: f64,
    pub se_a: f64,
    pub se_v: f64,
    pub se_t: f64,
}

/// Why a trial produced no record.
///
/// The first variant is a degenerate observation; the rest are degenerate
/// inversions. Each carries the offending value for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkipReason {
    /// N < 2: the sample variance is undefined.
    InsufficientSampleSize(u64),
    /// Observed accuracy hit 0 or 1: its logit is undefined.
    BoundaryAccuracy(f64),
    /// Observed RT variance was not strictly positive.
    NonPositiveVariance(f64),
    /// The drift-estimate square root had a negative argument.
    NegativeRadicand(f64),
}

impl SkipReason {
    /// True when the skip arose in the observation stage (before inversion).
    pub fn is_observation(&self) -> bool {
        matches!(self, SkipReason::InsufficientSampleSize(_))
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InsufficientSampleSize(n) => {
                write!(f, "sample size {} below minimum 2", n)
            }
            SkipReason::BoundaryAccuracy(r) => {
                write!(f, "observed accuracy {} at 0/1 boundary", r)
            }
            SkipReason::NonPositiveVariance(v) => {
                write!(f, "observed variance {} not strictly positive", v)
            }
            SkipReason::NegativeRadicand(x) => {
                write!(f, "negative drift-estimate radicand {}", x)
            }
        }
    }
}
