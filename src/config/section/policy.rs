//! Reporting severity shared by every build-time check.
//!
//! ```toml
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//!
//! [presets.blog]
//! on_inline_tags = "warn"
//! on_inline_authors = "ignore"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a build-time finding is surfaced.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    /// Drop the finding.
    Ignore,
    /// Report the finding, build continues.
    #[default]
    Warn,
    /// Report the finding, build aborts.
    Throw,
}

impl ReportingSeverity {
    /// Downgrade `throw` to `warn` (used by `validate --warn-only`).
    #[inline]
    pub const fn relaxed(self) -> Self {
        match self {
            Self::Throw => Self::Warn,
            other => other,
        }
    }
}

impl fmt::Display for ReportingSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        level: ReportingSeverity,
    }

    #[test]
    fn test_parse_known_values() {
        for (raw, expected) in [
            ("ignore", ReportingSeverity::Ignore),
            ("warn", ReportingSeverity::Warn),
            ("throw", ReportingSeverity::Throw),
        ] {
            let w: Wrapper = toml::from_str(&format!("level = \"{raw}\"")).unwrap();
            assert_eq!(w.level, expected);
            assert_eq!(expected.to_string(), raw);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        let result: Result<Wrapper, _> = toml::from_str("level = \"panic\"");
        assert!(result.is_err());

        // Case matters: the schema is closed.
        let result: Result<Wrapper, _> = toml::from_str("level = \"Throw\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_relaxed() {
        assert_eq!(ReportingSeverity::Throw.relaxed(), ReportingSeverity::Warn);
        assert_eq!(ReportingSeverity::Ignore.relaxed(), ReportingSeverity::Ignore);
    }
}
