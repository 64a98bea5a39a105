use crate::model::{ScanReport, ScanStatus};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Package")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Normalized")]
    normalized: String,
}

/// Renders findings as a table followed by a one-line summary.
pub fn render_table(report: &ScanReport) -> String {
    let mut out = String::new();

    if let Some(error) = &report.error {
        out.push_str(&format!("Error: {}\n", error));
    }

    if !report.findings.is_empty() {
        let rows: Vec<FindingRow> = report
            .findings
            .iter()
            .map(|f| FindingRow {
                name: truncate(&f.name, 50),
                version: truncate(&f.version, 30),
                normalized: truncate(&f.normalized_name, 50),
            })
            .collect();

        let table = Table::new(rows).with(Style::rounded()).to_string();
        out.push_str(&table);
        out.push('\n');
    }

    out.push_str(&summary(report));
    out
}

fn summary(report: &ScanReport) -> String {
    let format = report
        .format
        .map(|f| f.display_name())
        .unwrap_or("unrecognized format");

    match report.status {
        ScanStatus::Infected => format!(
            "{}: {} of {} packages denylisted ({}), {} suppressed",
            report.manifest.display(),
            report.findings.len(),
            report.packages_checked,
            format,
            report.suppressed
        ),
        ScanStatus::Clean => format!(
            "{}: clean, {} packages checked ({}), {} suppressed",
            report.manifest_file_name(),
            report.packages_checked,
            format,
            report.suppressed
        ),
        ScanStatus::NoDenylist => format!(
            "No bad packages loaded from {}; scan skipped",
            report.denylist.display()
        ),
        ScanStatus::Failed => format!("{}: scan failed", report.manifest.display()),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Finding, ManifestFormat};

    #[test]
    fn test_table_contains_findings_and_summary() {
        let mut report = ScanReport::new("package-lock.json", "deny.txt");
        report.status = ScanStatus::Infected;
        report.format = Some(ManifestFormat::NpmLockfile);
        report.packages_checked = 12;
        report.findings.push(Finding::new("left-pad", "left-pad", "1.0.0"));

        let out = render_table(&report);
        assert!(out.contains("Package"));
        assert!(out.contains("left-pad"));
        assert!(out.ends_with(
            "package-lock.json: 1 of 12 packages denylisted (npm lockfile v2/v3), 0 suppressed"
        ));
    }

    #[test]
    fn test_clean_summary_has_no_table() {
        let mut report = ScanReport::new("dir/sbom.json", "deny.txt");
        report.status = ScanStatus::Clean;
        assert_eq!(
            render_table(&report),
            "sbom.json: clean, 0 packages checked (unrecognized format), 0 suppressed"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-package-name", 10), "a-very-...");
    }
}
