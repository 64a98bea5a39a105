use super::{field_text, Document, FormatExtractor};
use crate::model::{normalize_name, DependencyEntry, ManifestFormat, UNKNOWN_VERSION};

/// npm lockfile v2/v3: `packages` maps install paths to package metadata.
///
/// The entry keyed by the empty string describes the project itself and is
/// skipped.
pub struct NpmLockfileExtractor;

impl FormatExtractor for NpmLockfileExtractor {
    fn format(&self) -> ManifestFormat {
        ManifestFormat::NpmLockfile
    }

    fn detects(&self, doc: &Document) -> bool {
        doc.get("packages").is_some_and(|packages| packages.is_object())
    }

    fn extract(&self, doc: &Document) -> Vec<DependencyEntry> {
        let Some(packages) = doc.get("packages").and_then(|v| v.as_object()) else {
            return Vec::new();
        };

        packages
            .iter()
            .filter(|(path, _)| !path.is_empty())
            .map(|(path, details)| {
                let version = details
                    .as_object()
                    .and_then(|details| field_text(details, "version"))
                    .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
                DependencyEntry::new(normalize_name(path), version)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_names_come_from_install_paths() {
        let doc = json!({
            "lockfileVersion": 3,
            "packages": {
                "": {"name": "my-app", "version": "0.0.0"},
                "node_modules/Left-Pad": {"version": "1.0.0"},
                "node_modules/a/node_modules/b": {"version": "2.0.0"},
                "node_modules/@scope/pkg": {"resolved": "https://registry.npmjs.org/x"}
            }
        });
        let doc = doc.as_object().unwrap();
        assert!(NpmLockfileExtractor.detects(doc));
        assert_eq!(
            NpmLockfileExtractor.extract(doc),
            vec![
                DependencyEntry::new("left-pad", "1.0.0"),
                DependencyEntry::new("b", "2.0.0"),
                DependencyEntry::new("@scope/pkg", "unknown"),
            ]
        );
    }

    #[test]
    fn test_workspace_paths_are_kept() {
        let doc = json!({"packages": {"packages/web": {"version": "1.0.0"}}});
        assert_eq!(
            NpmLockfileExtractor.extract(doc.as_object().unwrap()),
            vec![DependencyEntry::new("packages/web", "1.0.0")]
        );
    }

    #[test]
    fn test_non_object_details_have_unknown_version() {
        let doc = json!({"packages": {"node_modules/chalk": "5.0.0"}});
        assert_eq!(
            NpmLockfileExtractor.extract(doc.as_object().unwrap()),
            vec![DependencyEntry::new("chalk", "unknown")]
        );
    }
}
