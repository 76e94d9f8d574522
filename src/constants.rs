//! Reference experiment configuration.
//!
//! Maps the model notation to concrete values:
//! - a = boundary separation, drawn from [`BOUNDARY_SEP_RANGE`]
//! - v = drift rate, drawn from [`DRIFT_RATE_RANGE`]
//! - t = nondecision time, drawn from [`NONDECISION_TIME_RANGE`]
//! - N = simulated sample size, one of [`SAMPLE_SIZES`]

/// Boundary separation (a) sampling range, uniform.
pub const BOUNDARY_SEP_RANGE: (f64, f64) = (0.5, 2.0);

/// Drift rate (v) sampling range, uniform. Strictly positive, so the
/// forward equations never divide by zero.
pub const DRIFT_RATE_RANGE: (f64, f64) = (0.5, 2.0);

/// Nondecision time (t) sampling range, uniform.
pub const NONDECISION_TIME_RANGE: (f64, f64) = (0.1, 0.5);

/// Simulated sample sizes, in output order.
pub const SAMPLE_SIZES: [u64; 3] = [10, 40, 4000];

/// Trials per sample size.
pub const TRIALS_PER_SIZE: usize = 1000;

/// Stabilizer added to denominators involving the estimated drift rate.
pub const DRIFT_EPSILON: f64 = 1e-6;

/// Default RNG seed for the reference run.
pub const DEFAULT_SEED: u64 = 42;

/// Minimum sample size for a defined variance estimate.
pub const MIN_SAMPLE_SIZE: u64 = 2;
