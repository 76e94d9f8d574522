//! Result-table persistence.
//!
//! Writes the per-trial recovery table as delimited text with a header
//! row and every numeric field formatted to 6 decimal places.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::types::RecoveryRecord;

/// Column header of the result table.
pub const CSV_HEADER: &str = "N,Bias_a,Bias_v,Bias_t,SE_a,SE_v,SE_t";

/// Render the record table as CSV text.
pub fn records_to_csv(records: &[RecoveryRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for rec in records {
        let _ = writeln!(
            out,
            "{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            rec.n, rec.bias_a, rec.bias_v, rec.bias_t, rec.se_a, rec.se_v, rec.se_t
        );
    }
    out
}

/// Save the record table to `path`, creating parent directories.
pub fn save_records_csv(records: &[RecoveryRecord], path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        let _ = fs::create_dir_all(parent);
    }
    fs::write(path, records_to_csv(records)).expect("Failed to write results file");
}
