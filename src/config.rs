//! Configuration file handling.
//!
//! This module loads sbomscan defaults from a TOML file. Positional
//! arguments on the command line always take precedence over it.
//!
//! # Configuration Location
//!
//! - Linux: `~/.config/sbomscan/config.toml`
//! - macOS: `~/Library/Application Support/sbomscan/config.toml`
//! - Windows: `%APPDATA%\sbomscan\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! default_manifest = "build/bom.json"
//! default_denylist = "/etc/security/compromised-npm.txt"
//! default_format = "table"
//!
//! [ignore]
//! packages = ["event-stream", "@internal/*"]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest scanned when none is given.
pub const DEFAULT_MANIFEST: &str = "sbom.json";

/// Denylist used when none is given.
pub const DEFAULT_DENYLIST: &str = "vulnerable_packages.txt";

/// Application configuration.
///
/// # Example
///
/// ```no_run
/// use sbomscan::Config;
///
/// let config = Config::load().unwrap();
/// println!("Denylist: {}", config.default_denylist);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest path used when the first positional argument is omitted.
    ///
    /// Default: "sbom.json"
    pub default_manifest: String,

    /// Denylist path used when the second positional argument is omitted.
    ///
    /// Default: "vulnerable_packages.txt"
    pub default_denylist: String,

    /// Report format when no `--format` flag is provided.
    ///
    /// Valid values: "text", "table", "json"
    /// Default: "text"
    pub default_format: String,

    /// Findings to suppress.
    #[serde(default)]
    pub ignore: IgnoreConfig,
}

/// Denylisted packages to leave out of reports, e.g. accepted risks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Package names, compared against normalized names.
    ///
    /// Supports `*` wildcards (e.g. "@internal/*").
    pub packages: Vec<String>,
}

impl IgnoreConfig {
    /// Check if findings for a normalized package name should be dropped.
    pub fn should_ignore_package(&self, normalized_name: &str) -> bool {
        self.packages
            .iter()
            .any(|pattern| wildcard_match(&pattern.to_lowercase(), normalized_name))
    }
}

/// Matches `text` against a pattern where `*` stands for any run of
/// characters.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut segments = pattern.split('*');
    let Some(head) = segments.next() else {
        return text.is_empty();
    };
    let Some(mut rest) = text.strip_prefix(head) else {
        return false;
    };

    let tail: Vec<&str> = segments.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No wildcard at all.
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_manifest: DEFAULT_MANIFEST.to_string(),
            default_denylist: DEFAULT_DENYLIST.to_string(),
            default_format: "text".to_string(),
            ignore: IgnoreConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sbomscan")
            .join("config.toml")
    }
}
