//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section type exposes a `FIELDS` constant holding the dotted TOML
/// path of every field, so diagnostics always name the exact key the user
/// has to fix.
///
/// # Example
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELDS.name, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Build a path with a runtime component (e.g. an array index).
    ///
    /// Leaks the string; only used on diagnostic paths, which report once
    /// per load.
    pub fn leaked(path: String) -> Self {
        Self(Box::leak(path.into_boxed_str()))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
