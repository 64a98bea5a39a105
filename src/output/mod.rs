//! Report rendering.
//!
//! A [`ScanReport`] can be rendered as:
//!
//! - [`OutputFormat::Text`] - the human-readable danger/clean report
//! - [`OutputFormat::Table`] - findings as a table with a summary line
//! - [`OutputFormat::Json`] - the full report for programmatic use

mod json;
mod table;
mod text;

pub use json::render_json;
pub use table::render_table;
pub use text::render_text;

use crate::model::ScanReport;
use anyhow::Result;

/// Output format for scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain report, one line per finding
    Text,
    /// Table of findings
    Table,
    /// JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: {}. Use 'text', 'table', or 'json'",
                s
            )),
        }
    }
}

/// Renders the report into a string in the requested format.
pub fn format_report(report: &ScanReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn print_report(report: &ScanReport, format: OutputFormat) -> Result<()> {
    let rendered = format_report(report, format)?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("TABLE".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("sarif".parse::<OutputFormat>().is_err());
    }
}
