//! Ref name validation following git-style conventions.
//!
//! Valid ref names:
//! - Must be non-empty
//! - Must not contain whitespace, control characters, `~`, `^`, `:`, `?`, `*`, `[`, `\`
//! - Must not contain `..` (double dot) or `@{`
//! - Must not start or end with `/`
//! - Must not end with `.lock`
//! - Components between slashes must be non-empty and must not start with `.`
//!
//! Every ref is stored as a file under the metadata directory, so these
//! rules also keep names from escaping it.

use crate::error::{RefError, Result};

/// Characters that are forbidden anywhere in a ref name.
const FORBIDDEN_CHARS: &[char] = &[' ', '~', '^', ':', '?', '*', '[', '\\'];

fn invalid(name: &str, reason: impl Into<String>) -> RefError {
    RefError::InvalidRefName {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Validate a full ref name such as `HEAD` or `refs/tags/v1.0`.
///
/// # Examples
///
/// ```
/// use strata_refs::names::validate_ref_name;
///
/// assert!(validate_ref_name("HEAD").is_ok());
/// assert!(validate_ref_name("refs/tags/v1.0").is_ok());
/// assert!(validate_ref_name("").is_err());
/// assert!(validate_ref_name("refs/../objects").is_err());
/// ```
pub fn validate_ref_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "ref name must not be empty"));
    }

    if let Some(ch) = name
        .chars()
        .find(|c| c.is_control() || c.is_whitespace() || FORBIDDEN_CHARS.contains(c))
    {
        return Err(invalid(name, format!("contains forbidden character: {ch:?}")));
    }

    if name.contains("..") {
        return Err(invalid(name, "must not contain '..'"));
    }

    if name.contains("@{") {
        return Err(invalid(name, "must not contain '@{'"));
    }

    if name.starts_with('/') || name.ends_with('/') {
        return Err(invalid(name, "must not start or end with '/'"));
    }

    if name.ends_with(".lock") {
        return Err(invalid(name, "must not end with '.lock'"));
    }

    for component in name.split('/') {
        if component.is_empty() {
            return Err(invalid(name, "path components must not be empty"));
        }
        if component.starts_with('.') {
            return Err(invalid(
                name,
                format!("component must not start with '.': {component:?}"),
            ));
        }
    }

    Ok(())
}

/// Validate a short tag name (the part after `refs/tags/`).
///
/// Same rules as full ref names; a tag may not be the bare `@` alias either.
pub fn validate_tag_name(name: &str) -> Result<()> {
    let rejected = |reason: String| RefError::InvalidTagName {
        name: name.to_string(),
        reason,
    };
    if name == "@" {
        return Err(rejected("'@' is reserved for HEAD".into()));
    }
    validate_ref_name(name).map_err(|e| match e {
        RefError::InvalidRefName { reason, .. } => rejected(reason),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate_ref_name("HEAD").is_ok());
        assert!(validate_ref_name("refs/tags/v1.0").is_ok());
        assert!(validate_ref_name("refs/tags/release/2024").is_ok());
    }

    #[test]
    fn reject_empty_name() {
        assert!(validate_ref_name("").is_err());
    }

    #[test]
    fn reject_double_dot() {
        assert!(validate_ref_name("refs/../HEAD").is_err());
        assert!(validate_ref_name("a..b").is_err());
    }

    #[test]
    fn reject_whitespace_and_control() {
        assert!(validate_ref_name("has space").is_err());
        assert!(validate_ref_name("has\ttab").is_err());
        assert!(validate_ref_name("has\nnewline").is_err());
        assert!(validate_ref_name("nul\0byte").is_err());
    }

    #[test]
    fn reject_forbidden_chars() {
        for name in ["a~b", "a^b", "a:b", "a?b", "a*b", "a[b", "a\\b"] {
            assert!(validate_ref_name(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn reject_slash_boundaries() {
        assert!(validate_ref_name("/leading").is_err());
        assert!(validate_ref_name("trailing/").is_err());
        assert!(validate_ref_name("a//b").is_err());
    }

    #[test]
    fn reject_lock_suffix() {
        assert!(validate_ref_name("refs/tags/v1.lock").is_err());
    }

    #[test]
    fn reject_component_starting_with_dot() {
        assert!(validate_ref_name("refs/tags/.hidden").is_err());
    }

    #[test]
    fn tag_errors_use_tag_variant() {
        let err = validate_tag_name("bad name").unwrap_err();
        assert!(matches!(err, RefError::InvalidTagName { .. }));
        assert!(validate_tag_name("@").is_err());
        assert!(validate_tag_name("v1").is_ok());
    }
}
