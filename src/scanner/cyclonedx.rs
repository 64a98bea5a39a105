use super::{entry_from_fields, Document, FormatExtractor};
use crate::model::{DependencyEntry, ManifestFormat};

/// CycloneDX SBOMs list their dependencies under `components`.
pub struct CycloneDxExtractor;

impl FormatExtractor for CycloneDxExtractor {
    fn format(&self) -> ManifestFormat {
        ManifestFormat::CycloneDx
    }

    fn detects(&self, doc: &Document) -> bool {
        doc.contains_key("components")
    }

    fn extract(&self, doc: &Document) -> Vec<DependencyEntry> {
        let Some(components) = doc.get("components").and_then(|v| v.as_array()) else {
            return Vec::new();
        };

        components
            .iter()
            .filter_map(|component| component.as_object())
            .map(|component| entry_from_fields(component, "name", "version"))
            .collect()
    }
}
