use serde::Serialize;

/// Version reported when a manifest does not declare one.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Manifest shapes the scanner understands, in detection precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestFormat {
    /// CycloneDX SBOM (`components` list)
    #[serde(rename = "cyclonedx")]
    CycloneDx,
    /// SPDX SBOM (`packages` list)
    Spdx,
    /// npm `package-lock.json` v2/v3 (`packages` keyed by install path)
    NpmLockfile,
    /// npm `package-lock.json` v1 or `package.json` (`dependencies` map)
    NpmDependencies,
}

impl ManifestFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestFormat::CycloneDx => "cyclonedx",
            ManifestFormat::Spdx => "spdx",
            ManifestFormat::NpmLockfile => "npm-lockfile",
            ManifestFormat::NpmDependencies => "npm-dependencies",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ManifestFormat::CycloneDx => "CycloneDX",
            ManifestFormat::Spdx => "SPDX",
            ManifestFormat::NpmLockfile => "npm lockfile v2/v3",
            ManifestFormat::NpmDependencies => "npm lockfile v1 / package.json",
        }
    }
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A dependency as declared by a manifest, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub name: String,
    pub version: String,
}

impl DependencyEntry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A declared dependency whose normalized name is on the denylist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Name as shown in reports.
    pub name: String,
    /// Name used for the denylist lookup.
    pub normalized_name: String,
    pub version: String,
}

impl Finding {
    pub fn new(
        name: impl Into<String>,
        normalized_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            normalized_name: normalized_name.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.name, self.version)
    }
}
