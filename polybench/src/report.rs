//! JSON artifact and console summary.
use crate::error::BenchError;
use polybench_core::BenchmarkReport;
use std::fs;
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};

/// What happened to the artifact. The console summary is printed either way.
#[derive(Debug)]
pub enum SinkOutcome {
    Written(PathBuf),
    WriteFailed(BenchError),
}

/// Write the artifact to `path`, then print the summary.
///
/// A failed write is reported and returned, never raised.
pub fn publish(report: &BenchmarkReport, path: &Path) -> SinkOutcome {
    let outcome = match write_artifact(report, path) {
        Ok(()) => {
            println!("\nResults saved to {}", path.display());
            SinkOutcome::Written(path.to_path_buf())
        }
        Err(err) => {
            warn!("Could not save results to {}: {err}", path.display());
            eprintln!("\nFailed to save results to {}: {err}", path.display());
            SinkOutcome::WriteFailed(err)
        }
    };

    println!("\n{report}");
    outcome
}

/// Serialize `report` as pretty JSON, replacing whatever is at `path`.
pub fn write_artifact(report: &BenchmarkReport, path: &Path) -> Result<(), BenchError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    debug!("Wrote {} timeseries points to {}", report.timeseries.len(), path.display());
    Ok(())
}
