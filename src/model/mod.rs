//! Core data types for dependencies, findings, and scan reports.
//!
//! - [`normalize_name`] - Canonical form used for denylist lookups
//! - [`DependencyEntry`] - A (name, version) pair declared by a manifest
//! - [`ManifestFormat`] - Which manifest shape a document was read as
//! - [`Finding`] - A declared dependency that is on the denylist
//! - [`ScanReport`] - Complete result of one audit
//!
//! # Example
//!
//! ```
//! use sbomscan::model::{normalize_name, Finding};
//!
//! assert_eq!(normalize_name("node_modules/Left-Pad"), "left-pad");
//!
//! let finding = Finding::new("left-pad", "left-pad", "1.0.0");
//! assert_eq!(finding.to_string(), "left-pad @ 1.0.0");
//! ```

mod name;
mod package;
mod report;

pub use name::*;
pub use package::*;
pub use report::*;
