use super::{entry_from_fields, Document, FormatExtractor};
use crate::model::{DependencyEntry, ManifestFormat};

/// SPDX documents keep a `packages` list with `versionInfo`.
pub struct SpdxExtractor;

impl FormatExtractor for SpdxExtractor {
    fn format(&self) -> ManifestFormat {
        ManifestFormat::Spdx
    }

    fn detects(&self, doc: &Document) -> bool {
        doc.get("packages").is_some_and(|packages| packages.is_array())
    }

    fn extract(&self, doc: &Document) -> Vec<DependencyEntry> {
        let Some(packages) = doc.get("packages").and_then(|v| v.as_array()) else {
            return Vec::new();
        };

        packages
            .iter()
            .filter_map(|package| package.as_object())
            .map(|package| entry_from_fields(package, "name", "versionInfo"))
            .collect()
    }
}
