//! End-to-end check of the reference configuration.
//!
//! Runs the full grid (3 sample sizes x 1000 trials) and validates the
//! output-table contract: row count, sample-size column domain, and the
//! squared-error/bias identity.

use ezdiff::output::{records_to_csv, CSV_HEADER};
use ezdiff::simulation::{run_experiment, ExperimentConfig};

#[test]
fn reference_run_table_contract() {
    let config = ExperimentConfig::default();
    let result = run_experiment(&config);

    let max_rows = config.sample_sizes.len() * config.trials_per_size;
    assert_eq!(max_rows, 3000);
    assert!(result.records.len() <= max_rows);
    assert_eq!(
        result.records.len() as u64 + result.skips.total(),
        result.trials_attempted
    );

    for rec in &result.records {
        assert!(config.sample_sizes.contains(&rec.n));
        assert!((rec.se_a - rec.bias_a * rec.bias_a).abs() < 1e-12);
        assert!((rec.se_v - rec.bias_v * rec.bias_v).abs() < 1e-12);
        assert!((rec.se_t - rec.bias_t * rec.bias_t).abs() < 1e-12);
    }

    // Valid sample sizes never trip the observation guard; large N should
    // essentially never hit a degenerate inversion either.
    assert_eq!(result.skips.insufficient_sample, 0);

    // At N = 4000 the binomial proportion cannot realistically pin to 0/1
    // for accuracies in (0.5, 1), so most of the grid must survive.
    assert!(result.records.len() > max_rows / 2);

    let csv = records_to_csv(&result.records);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(lines.count(), result.records.len());
}

#[test]
fn reference_run_is_seed_deterministic() {
    let config = ExperimentConfig {
        trials_per_size: 200,
        ..ExperimentConfig::default()
    };
    let r1 = run_experiment(&config);
    let r2 = run_experiment(&config);

    assert_eq!(records_to_csv(&r1.records), records_to_csv(&r2.records));
}
