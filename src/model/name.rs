/// Path segment npm uses for installed packages in lockfile keys.
pub const NODE_MODULES: &str = "node_modules/";

/// Normalizes a package identifier for denylist comparison.
///
/// The identifier is lower-cased, everything up to and including the last
/// `node_modules/` segment is dropped, and surrounding whitespace is
/// trimmed. Nested lockfile keys such as `node_modules/a/node_modules/b`
/// collapse to `b`.
///
/// Normalizing an already-normalized name returns it unchanged.
///
/// # Example
///
/// ```
/// use sbomscan::model::normalize_name;
///
/// assert_eq!(normalize_name("node_modules/a/node_modules/B"), "b");
/// assert_eq!(normalize_name("  React "), "react");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let tail = match lowered.rfind(NODE_MODULES) {
        Some(idx) => &lowered[idx + NODE_MODULES.len()..],
        None => lowered.as_str(),
    };
    tail.trim().to_string()
}
