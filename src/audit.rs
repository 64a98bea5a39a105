//! Runs a complete audit: load the denylist, scan the manifest, build a
//! [`ScanReport`].
//!
//! Every failure is recorded on the report instead of being returned, so an
//! audit always produces something to print.

use std::path::Path;

use tracing::debug;

use crate::config::IgnoreConfig;
use crate::denylist::Denylist;
use crate::model::{ScanReport, ScanStatus};
use crate::scanner::scan_file;

/// Audits `manifest` against the denylist at `denylist_path`.
///
/// The manifest is not opened when the denylist is missing or empty; the
/// report then has status [`ScanStatus::NoDenylist`]. Findings whose
/// normalized name matches `ignore` are dropped and counted as suppressed.
///
/// # Example
///
/// ```no_run
/// use sbomscan::{audit::audit, config::IgnoreConfig, model::ScanStatus};
///
/// let report = audit("package-lock.json", "vulnerable_packages.txt", &IgnoreConfig::default());
/// if report.status == ScanStatus::Infected {
///     for finding in &report.findings {
///         println!("{finding}");
///     }
/// }
/// ```
pub fn audit(
    manifest: impl AsRef<Path>,
    denylist_path: impl AsRef<Path>,
    ignore: &IgnoreConfig,
) -> ScanReport {
    let manifest = manifest.as_ref();
    let denylist_path = denylist_path.as_ref();
    let mut report = ScanReport::new(manifest, denylist_path);

    let denylist = match Denylist::load(denylist_path) {
        Ok(denylist) => denylist,
        Err(e) => {
            debug!("{e}");
            report.error = Some(e.to_string());
            return report;
        }
    };
    report.denylist_size = denylist.len();

    if denylist.is_empty() {
        debug!(path = %denylist_path.display(), "denylist is empty, skipping scan");
        return report;
    }

    let outcome = match scan_file(manifest, &denylist) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!("{e}");
            report.status = ScanStatus::Failed;
            report.error = Some(e.to_string());
            return report;
        }
    };

    report.format = outcome.format;
    report.packages_checked = outcome.packages_checked;

    let (ignored, findings): (Vec<_>, Vec<_>) = outcome
        .findings
        .into_iter()
        .partition(|finding| ignore.should_ignore_package(&finding.normalized_name));
    for finding in &ignored {
        debug!(package = %finding, "finding suppressed by ignore list");
    }

    report.suppressed = ignored.len();
    report.status = if findings.is_empty() {
        ScanStatus::Clean
    } else {
        ScanStatus::Infected
    };
    report.findings = findings;
    report
}
