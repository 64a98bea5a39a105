pub mod audit;
pub mod config;
pub mod denylist;
pub mod error;
pub mod model;
pub mod output;
pub mod scanner;

pub use audit::audit;
pub use config::Config;
pub use denylist::Denylist;
pub use error::ScanError;
pub use model::{normalize_name, Finding, ManifestFormat, ScanReport, ScanStatus};
