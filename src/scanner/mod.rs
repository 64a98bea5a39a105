//! Manifest format detection and denylist matching.
//!
//! This module provides the [`FormatExtractor`] trait and one implementation
//! per supported manifest shape. Detection runs the extractors in a fixed
//! precedence order and the first one that recognizes the document wins:
//!
//! | Extractor | Shape | Name | Version |
//! |-----------|-------|------|---------|
//! | [`CycloneDxExtractor`] | `components` | `name` | `version` |
//! | [`SpdxExtractor`] | `packages` list | `name` | `versionInfo` |
//! | [`NpmLockfileExtractor`] | `packages` map | install path key | `version` |
//! | [`NpmDependenciesExtractor`] | `dependencies` map | key | string or `version` |
//!
//! Documents returned by dependency-graph APIs often nest the SBOM under a
//! top-level `sbom` object; that wrapper is removed before detection.
//!
//! # Example
//!
//! ```
//! use sbomscan::{scanner::scan_document, Denylist};
//! use serde_json::json;
//!
//! let denylist = Denylist::parse("left-pad\n");
//! let doc = json!({"sbom": {"components": [{"name": "left-pad", "version": "1.0.0"}]}});
//!
//! let outcome = scan_document(&doc, &denylist);
//! let matches: Vec<String> = outcome.findings.iter().map(|f| f.to_string()).collect();
//! assert_eq!(matches, ["left-pad @ 1.0.0"]);
//! ```

mod cyclonedx;
mod npm_dependencies;
mod npm_lockfile;
mod spdx;

pub use cyclonedx::CycloneDxExtractor;
pub use npm_dependencies::NpmDependenciesExtractor;
pub use npm_lockfile::NpmLockfileExtractor;
pub use spdx::SpdxExtractor;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::denylist::Denylist;
use crate::error::{Result, ScanError};
use crate::model::{normalize_name, DependencyEntry, Finding, ManifestFormat, UNKNOWN_VERSION};

/// A JSON object, as seen by the extractors.
pub type Document = Map<String, Value>;

/// Key under which some APIs wrap the SBOM document.
const SBOM_WRAPPER_KEY: &str = "sbom";

/// Trait for reading the dependency list out of one manifest shape.
pub trait FormatExtractor {
    /// Returns the format this extractor handles.
    fn format(&self) -> ManifestFormat;

    /// Returns true if the document has the structure of this format.
    fn detects(&self, doc: &Document) -> bool;

    /// Extracts declared dependencies in document order.
    ///
    /// Only called after [`detects`](Self::detects) returned true.
    fn extract(&self, doc: &Document) -> Vec<DependencyEntry>;

    /// Whether findings show the name as declared instead of normalized.
    fn displays_declared_name(&self) -> bool {
        false
    }
}

/// Returns every extractor in detection precedence order.
pub fn all_extractors() -> Vec<Box<dyn FormatExtractor>> {
    vec![
        Box::new(CycloneDxExtractor),
        Box::new(SpdxExtractor),
        Box::new(NpmLockfileExtractor),
        Box::new(NpmDependenciesExtractor),
    ]
}

/// Result of scanning a single document.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Detected format, or `None` if no known shape was found.
    pub format: Option<ManifestFormat>,
    /// Number of dependency entries examined.
    pub packages_checked: usize,
    /// Denylisted dependencies in document order.
    pub findings: Vec<Finding>,
}

/// Returns the document the extractors should look at.
///
/// A root object holding an `sbom` object is unwrapped. Anything that is
/// not an object has no recognizable shape.
pub fn effective_document(root: &Value) -> Option<&Document> {
    let root = root.as_object()?;
    match root.get(SBOM_WRAPPER_KEY) {
        Some(Value::Object(inner)) => Some(inner),
        _ => Some(root),
    }
}

/// Scans a parsed manifest against the denylist.
pub fn scan_document(root: &Value, denylist: &Denylist) -> ScanOutcome {
    let Some(doc) = effective_document(root) else {
        debug!("manifest root is not an object");
        return ScanOutcome::default();
    };

    let extractors = all_extractors();
    let Some(extractor) = extractors.iter().find(|e| e.detects(doc)) else {
        debug!("no known manifest format detected");
        return ScanOutcome::default();
    };

    let entries = extractor.extract(doc);
    debug!(
        format = extractor.format().as_str(),
        entries = entries.len(),
        "extracted dependencies"
    );

    let findings = entries
        .iter()
        .filter_map(|entry| {
            let normalized = normalize_name(&entry.name);
            if !denylist.contains(&normalized) {
                return None;
            }
            let shown = if extractor.displays_declared_name() {
                entry.name.clone()
            } else {
                normalized.clone()
            };
            Some(Finding::new(shown, normalized, entry.version.clone()))
        })
        .collect();

    ScanOutcome {
        format: Some(extractor.format()),
        packages_checked: entries.len(),
        findings,
    }
}

/// Reads, parses, and scans a manifest file.
///
/// # Errors
///
/// Returns [`ScanError::ManifestNotFound`] if the file is missing,
/// [`ScanError::ManifestUnreadable`] if it cannot be read, and
/// [`ScanError::ManifestParse`] if it is not valid JSON.
pub fn scan_file(path: impl AsRef<Path>, denylist: &Denylist) -> Result<ScanOutcome> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ScanError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => ScanError::ManifestUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let root: Value = serde_json::from_str(&content).map_err(|source| ScanError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(scan_document(&root, denylist))
}

/// Reads a field as display text. `null` counts as missing.
fn field_text(obj: &Document, key: &str) -> Option<String> {
    value_text(obj.get(key)?)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Builds an entry from an object's name and version fields.
fn entry_from_fields(obj: &Document, name_key: &str, version_key: &str) -> DependencyEntry {
    DependencyEntry::new(
        field_text(obj, name_key).unwrap_or_default(),
        field_text(obj, version_key).unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
    )
}
