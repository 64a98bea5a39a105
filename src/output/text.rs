use crate::model::{ScanReport, ScanStatus};

/// Renders the plain report printed by default.
pub fn render_text(report: &ScanReport) -> String {
    let mut lines = Vec::new();

    if let Some(error) = &report.error {
        lines.push(format!("❌ Error: {}", error));
    }

    match report.status {
        ScanStatus::Infected => {
            lines.push(String::new());
            lines.push(format!(
                "🚨 DANGER in {}: Found infected packages:",
                report.manifest.display()
            ));
            for finding in &report.findings {
                lines.push(format!("  - {}", finding));
            }
        }
        ScanStatus::Clean => {
            lines.push(format!("✅ CLEAN: {}", report.manifest_file_name()));
        }
        ScanStatus::NoDenylist => {
            lines.push(format!(
                "⚠️  No bad packages loaded from {}; scan skipped.",
                report.denylist.display()
            ));
        }
        ScanStatus::Failed => {}
    }

    if report.suppressed > 0 {
        lines.push(format!(
            "({} finding(s) suppressed by ignore list)",
            report.suppressed
        ));
    }

    lines.join("\n")
}
