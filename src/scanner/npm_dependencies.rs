use serde_json::Value;

use super::{field_text, Document, FormatExtractor};
use crate::model::{DependencyEntry, ManifestFormat, UNKNOWN_VERSION};

/// npm lockfile v1 and `package.json` share a `dependencies` map.
///
/// In `package.json` the value is the version range string; in a v1
/// lockfile it is an object with a `version` field.
pub struct NpmDependenciesExtractor;

impl FormatExtractor for NpmDependenciesExtractor {
    fn format(&self) -> ManifestFormat {
        ManifestFormat::NpmDependencies
    }

    fn detects(&self, doc: &Document) -> bool {
        doc.contains_key("dependencies")
    }

    fn extract(&self, doc: &Document) -> Vec<DependencyEntry> {
        let Some(dependencies) = doc.get("dependencies").and_then(|v| v.as_object()) else {
            return Vec::new();
        };

        dependencies
            .iter()
            .filter_map(|(name, details)| {
                let version = match details {
                    Value::String(range) => range.clone(),
                    Value::Object(details) => field_text(details, "version")
                        .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
                    _ => return None,
                };
                Some(DependencyEntry::new(name.clone(), version))
            })
            .collect()
    }

    fn displays_declared_name(&self) -> bool {
        true
    }
}
