//! Forward and inverse EZ-diffusion equations.
//!
//! The forward map takes a parameter triple (a, v, t) to the predicted
//! summary statistics (accuracy, mean RT, RT variance); the inverse map
//! recovers the triple from observed statistics. Both are pure. The
//! inverse refuses numerically degenerate inputs with a [`SkipReason`]
//! instead of letting NaN leak into the result table.

use crate::constants::DRIFT_EPSILON;
use crate::types::{DiffusionParams, ObservedStats, PredictedStats, SkipReason};

/// Forward equations: predicted statistics for a parameter triple.
///
/// With y = exp(-a·v):
///   R = 1 / (1 + y)
///   M = t + (a / 2v) · (1 - y) / (1 + y)
///   V = (a / 2v³) · (1 - 2avy - y²) / (1 + y)²
///
/// The sampler's ranges (a, v > 0) keep every denominator nonzero.
#[inline]
pub fn forward_statistics(params: &DiffusionParams) -> PredictedStats {
    let a = params.boundary_separation;
    let v = params.drift_rate;
    let t = params.nondecision_time;

    let y = (-a * v).exp();
    let accuracy = 1.0 / (1.0 + y);
    let mean_rt = t + (a / (2.0 * v)) * ((1.0 - y) / (1.0 + y));
    let variance_rt =
        (a / (2.0 * v.powi(3))) * ((1.0 - 2.0 * a * v * y - y * y) / ((1.0 + y) * (1.0 + y)));

    PredictedStats {
        accuracy,
        mean_rt,
        variance_rt,
    }
}

/// Inverse equations: recover (â, v̂, t̂) from observed statistics.
///
/// Degenerate inputs are rejected: accuracy exactly 0 or 1 (undefined
/// logit), non-positive variance, or a negative argument under the
/// drift-estimate square root. Denominators involving the estimated
/// drift rate carry a stabilizing epsilon.
pub fn invert_statistics(obs: &ObservedStats) -> Result<DiffusionParams, SkipReason> {
    let r = obs.accuracy;
    let vobs = obs.variance_rt;

    if r <= 0.0 || r >= 1.0 {
        return Err(SkipReason::BoundaryAccuracy(r));
    }
    if vobs <= 0.0 {
        return Err(SkipReason::NonPositiveVariance(vobs));
    }

    let l = (r / (1.0 - r)).ln();
    let radicand = l * (r * r * l - r * l + r - 0.5) / (vobs + DRIFT_EPSILON);
    if radicand < 0.0 {
        return Err(SkipReason::NegativeRadicand(radicand));
    }

    // f64::signum(0.0) is +1.0, which matches the r = 0.5 convention:
    // the radicand is 0 there and the drift estimate collapses to 0.
    let drift = (r - 0.5).signum() * radicand.sqrt();
    let boundary = l / (drift + DRIFT_EPSILON);

    let y = (-drift * boundary).exp();
    let nondecision =
        obs.mean_rt - (boundary / (2.0 * (drift + DRIFT_EPSILON))) * ((1.0 - y) / (1.0 + y));

    Ok(DiffusionParams {
        boundary_separation: boundary,
        drift_rate: drift,
        nondecision_time: nondecision,
    })
}
