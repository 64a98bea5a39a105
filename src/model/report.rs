use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{Finding, ManifestFormat};

/// Overall outcome of an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// The manifest was scanned and nothing matched.
    Clean,
    /// At least one denylisted package was found.
    Infected,
    /// The denylist was missing or empty, so no scan took place.
    NoDenylist,
    /// The manifest could not be read or parsed.
    Failed,
}

/// Result of auditing one manifest against one denylist.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub manifest: PathBuf,
    pub denylist: PathBuf,
    pub scan_time: DateTime<Utc>,
    pub status: ScanStatus,
    /// Number of distinct names loaded from the denylist.
    pub denylist_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ManifestFormat>,
    /// Number of dependency entries examined.
    pub packages_checked: usize,
    pub findings: Vec<Finding>,
    /// Findings dropped by the ignore list.
    pub suppressed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanReport {
    pub fn new(manifest: impl Into<PathBuf>, denylist: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            denylist: denylist.into(),
            scan_time: Utc::now(),
            status: ScanStatus::NoDenylist,
            denylist_size: 0,
            format: None,
            packages_checked: 0,
            findings: Vec::new(),
            suppressed: 0,
            error: None,
        }
    }

    /// File name of the manifest without its directory.
    pub fn manifest_file_name(&self) -> String {
        base_name(&self.manifest)
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_has_not_scanned() {
        let report = ScanReport::new("sbom.json", "vulnerable_packages.txt");
        assert_eq!(report.status, ScanStatus::NoDenylist);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_manifest_file_name_strips_directories() {
        let report = ScanReport::new("ci/out/sbom.json", "deny.txt");
        assert_eq!(report.manifest_file_name(), "sbom.json");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ScanStatus::NoDenylist).unwrap();
        assert_eq!(json, "\"no_denylist\"");
    }
}
