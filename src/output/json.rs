use crate::model::ScanReport;
use anyhow::Result;

pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Finding, ManifestFormat, ScanStatus};

    #[test]
    fn test_json_report_fields() {
        let mut report = ScanReport::new("sbom.json", "deny.txt");
        report.status = ScanStatus::Infected;
        report.format = Some(ManifestFormat::Spdx);
        report.findings.push(Finding::new("left-pad", "left-pad", "1.0.0"));

        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["status"], "infected");
        assert_eq!(value["format"], "spdx");
        assert_eq!(value["findings"][0]["version"], "1.0.0");
        assert!(value.get("error").is_none());
    }
}
