//! Aggregate recovery statistics from the per-trial record table.
//!
//! Summarizes each sample-size group: trial counts, mean and standard
//! deviation of the bias per parameter, and RMSE per parameter. The
//! aggregate is a diagnostic artifact; the per-trial table stays the
//! primary output.

use serde::Serialize;

use super::engine::SkipCounts;
use crate::types::RecoveryRecord;

// ── Top-level statistics ────────────────────────────────────────────

#[derive(Serialize)]
pub struct RecoveryStatistics {
    pub seed: u64,
    pub trials_attempted: u64,
    pub trials_recorded: u64,
    pub skips: SkipCounts,
    pub groups: Vec<GroupStatistics>,
}

/// Per-sample-size summary.
#[derive(Serialize)]
pub struct GroupStatistics {
    pub n: u64,
    pub trials: u64,
    pub bias: ParameterSummary,
    pub rmse: ParameterTriple,
}

/// Mean and spread of the signed bias, per parameter.
#[derive(Serialize)]
pub struct ParameterSummary {
    pub mean: ParameterTriple,
    pub std_dev: ParameterTriple,
}

#[derive(Serialize)]
pub struct ParameterTriple {
    pub a: f64,
    pub v: f64,
    pub t: f64,
}

// ── Aggregation ─────────────────────────────────────────────────────

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

fn rmse(squared_errors: &[f64]) -> f64 {
    if squared_errors.is_empty() {
        return 0.0;
    }
    (squared_errors.iter().sum::<f64>() / squared_errors.len() as f64).sqrt()
}

/// Aggregate statistics from a slice of RecoveryRecords.
///
/// Groups appear in first-encounter order, which matches the driver's
/// configured sample-size order.
pub fn aggregate_statistics(
    records: &[RecoveryRecord],
    trials_attempted: u64,
    skips: SkipCounts,
    seed: u64,
) -> RecoveryStatistics {
    let mut sizes: Vec<u64> = Vec::new();
    for rec in records {
        if !sizes.contains(&rec.n) {
            sizes.push(rec.n);
        }
    }

    let groups: Vec<GroupStatistics> = sizes
        .iter()
        .map(|&n| {
            let group: Vec<&RecoveryRecord> = records.iter().filter(|r| r.n == n).collect();

            let bias_a: Vec<f64> = group.iter().map(|r| r.bias_a).collect();
            let bias_v: Vec<f64> = group.iter().map(|r| r.bias_v).collect();
            let bias_t: Vec<f64> = group.iter().map(|r| r.bias_t).collect();
            let se_a: Vec<f64> = group.iter().map(|r| r.se_a).collect();
            let se_v: Vec<f64> = group.iter().map(|r| r.se_v).collect();
            let se_t: Vec<f64> = group.iter().map(|r| r.se_t).collect();

            let (mean_a, std_a) = mean_and_std(&bias_a);
            let (mean_v, std_v) = mean_and_std(&bias_v);
            let (mean_t, std_t) = mean_and_std(&bias_t);

            GroupStatistics {
                n,
                trials: group.len() as u64,
                bias: ParameterSummary {
                    mean: ParameterTriple {
                        a: mean_a,
                        v: mean_v,
                        t: mean_t,
                    },
                    std_dev: ParameterTriple {
                        a: std_a,
                        v: std_v,
                        t: std_t,
                    },
                },
                rmse: ParameterTriple {
                    a: rmse(&se_a),
                    v: rmse(&se_v),
                    t: rmse(&se_t),
                },
            }
        })
        .collect();

    RecoveryStatistics {
        seed,
        trials_attempted,
        trials_recorded: records.len() as u64,
        skips,
        groups,
    }
}

/// Save aggregated statistics as JSON.
pub fn save_statistics(stats: &RecoveryStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
