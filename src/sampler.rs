//! True-parameter sampling.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::constants::{BOUNDARY_SEP_RANGE, DRIFT_RATE_RANGE, NONDECISION_TIME_RANGE};
use crate::types::DiffusionParams;

/// Draw one true parameter triple, each component independently uniform
/// over its configured range.
#[inline]
pub fn sample_parameters(rng: &mut SmallRng) -> DiffusionParams {
    DiffusionParams {
        boundary_separation: rng.random_range(BOUNDARY_SEP_RANGE.0..BOUNDARY_SEP_RANGE.1),
        drift_rate: rng.random_range(DRIFT_RATE_RANGE.0..DRIFT_RATE_RANGE.1),
        nondecision_time: rng.random_range(NONDECISION_TIME_RANGE.0..NONDECISION_TIME_RANGE.1),
    }
}
