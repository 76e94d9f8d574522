//! Finite-sample observation noise.
//!
//! Perturbs model-predicted statistics to emulate what a sample of N
//! trials would actually yield: binomial proportion noise on accuracy,
//! standard-error-scaled normal noise on the mean RT, and
//! chi-squared-family (gamma) noise on the RT variance with N - 1
//! degrees of freedom.

use rand::rngs::SmallRng;
use rand_distr::{Binomial, Distribution, Gamma, Normal};

use crate::constants::MIN_SAMPLE_SIZE;
use crate::types::{ObservedStats, PredictedStats, SkipReason};

/// Draw one noisy realization of `pred` for a sample of size `n`.
///
/// Fails with [`SkipReason::InsufficientSampleSize`] when n < 2, since a
/// sample variance needs at least two observations. The distribution
/// parameters are otherwise valid by construction: the forward model
/// yields accuracy in (0, 1) and strictly positive variance.
pub fn simulate_observed(
    pred: &PredictedStats,
    n: u64,
    rng: &mut SmallRng,
) -> Result<ObservedStats, SkipReason> {
    if n < MIN_SAMPLE_SIZE {
        return Err(SkipReason::InsufficientSampleSize(n));
    }

    let successes = Binomial::new(n, pred.accuracy)
        .expect("predicted accuracy outside [0, 1]")
        .sample(rng);
    let accuracy = successes as f64 / n as f64;

    let mean_rt = Normal::new(pred.mean_rt, (pred.variance_rt / n as f64).sqrt())
        .expect("predicted variance not positive")
        .sample(rng);

    let df = (n - 1) as f64;
    let variance_rt = Gamma::new(df / 2.0, 2.0 * pred.variance_rt / df)
        .expect("degenerate gamma parameters")
        .sample(rng);

    Ok(ObservedStats {
        accuracy,
        mean_rt,
        variance_rt,
    })
}
