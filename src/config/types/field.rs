//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path to a field in `quire.toml`.
///
/// Generated by `#[derive(Config)]`, so every diagnostic names a field
/// that actually exists in the schema.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "i18n")]
/// pub struct I18nConfig {
///     pub default_locale: String,
/// }
///
/// // Generated:
/// // I18nConfig::FIELDS.default_locale == FieldPath("i18n.default_locale")
/// diag.referential(I18nConfig::FIELDS.default_locale, "not in locales", "add it");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
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
