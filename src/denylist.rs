//! Loading the denylist of compromised package names.
//!
//! The denylist is a plain text file with one package per line. Only the
//! first whitespace-separated token of a line is used, so a version column
//! may follow the name:
//!
//! ```text
//! left-pad 1.3.0
//! @ctrl/tinycolor	4.1.1
//! node_modules/event-stream
//! ```
//!
//! Names are stored normalized (see [`normalize_name`]), and matching
//! ignores versions entirely.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScanError};
use crate::model::normalize_name;

/// An immutable set of normalized package names.
///
/// # Example
///
/// ```
/// use sbomscan::Denylist;
///
/// let denylist = Denylist::parse("Left-Pad 1.2.3\n\n  event-stream\n");
/// assert_eq!(denylist.len(), 2);
/// assert!(denylist.contains("left-pad"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    names: HashSet<String>,
}

impl Denylist {
    /// Reads and parses a denylist file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::DenylistNotFound`] if the file does not exist and
    /// [`ScanError::DenylistUnreadable`] for any other read failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ScanError::DenylistNotFound {
                path: path.to_path_buf(),
            },
            _ => ScanError::DenylistUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let denylist = Self::parse(&content);
        debug!(
            path = %path.display(),
            names = denylist.len(),
            "loaded denylist"
        );
        Ok(denylist)
    }

    /// Parses denylist text. Blank lines are skipped.
    ///
    /// `\n`, `\r\n` and a bare `\r` all end a line.
    pub fn parse(content: &str) -> Self {
        content
            .split(['\r', '\n'])
            .filter_map(|line| line.split_whitespace().next())
            .collect()
    }

    /// Checks membership of an already-normalized name.
    pub fn contains(&self, normalized_name: &str) -> bool {
        self.names.contains(normalized_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|raw| normalize_name(raw.as_ref()))
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }
}
