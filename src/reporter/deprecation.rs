//! Deprecation markers in step documentation.
//!
//! A step is deprecated when its documentation starts with `*DEPRECATED` and
//! the marker is closed by a later `*`. Text after the closing `*` explains
//! what to use instead.

const DEPRECATED_MARKER: &str = "*DEPRECATED";

/// Warning to log for a deprecated step, or `None` if it is not deprecated.
pub fn deprecation_warning(name: &str, doc: &str) -> Option<String> {
    let rest = doc.strip_prefix(DEPRECATED_MARKER)?;
    let (_, explanation) = rest.split_once('*')?;
    let explanation = explanation.trim();

    let mut warning = format!("Step '{}' is deprecated.", name);
    if !explanation.is_empty() {
        warning.push(' ');
        warning.push_str(explanation);
    }
    Some(warning)
}
