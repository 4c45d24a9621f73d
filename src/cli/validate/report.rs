//! Validation findings and report formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::config::{BlogOptions, ReportingSeverity, SiteConfig};
use crate::utils::plural_s;

/// Kind of problem found while walking the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Check {
    /// Site route that nothing generates.
    BrokenLink,
    /// Relative link to a Markdown file that does not exist.
    BrokenMarkdownLink,
    /// Tag not declared in the tags file.
    InlineTag,
    /// Author defined in front matter instead of the authors map.
    InlineAuthor,
    /// Post without a truncation marker.
    UntruncatedPost,
    /// Referenced file or directory missing on disk. Always fatal.
    MissingResource,
}

impl Check {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BrokenLink => "broken link",
            Self::BrokenMarkdownLink => "broken markdown link",
            Self::InlineTag => "inline tag",
            Self::InlineAuthor => "inline author",
            Self::UntruncatedPost => "untruncated post",
            Self::MissingResource => "missing resource",
        }
    }

    /// Severity configured for this check.
    pub fn severity(self, config: &SiteConfig, blog: Option<&BlogOptions>) -> ReportingSeverity {
        let blog_policy = |pick: fn(&BlogOptions) -> ReportingSeverity| {
            blog.map_or(ReportingSeverity::Warn, pick)
        };
        match self {
            Self::BrokenLink => config.on_broken_links,
            Self::BrokenMarkdownLink => config.on_broken_markdown_links,
            Self::InlineTag => blog_policy(|b| b.on_inline_tags),
            Self::InlineAuthor => blog_policy(|b| b.on_inline_authors),
            Self::UntruncatedPost => blog_policy(|b| b.on_untruncated_blog_posts),
            Self::MissingResource => ReportingSeverity::Throw,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub check: Check,
    /// File the finding belongs to, relative to the site root.
    pub source: String,
    /// The link, tag, author or path at fault.
    pub target: String,
    /// Extra detail; may be empty.
    pub message: String,
}

impl Finding {
    pub fn new(
        check: Check,
        source: impl Into<String>,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check,
            source: source.into(),
            target: target.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} `{}`", self.source, self.check, self.target)?;
        if !self.message.is_empty() {
            write!(f, " ({})", self.message)?;
        }
        Ok(())
    }
}

/// Fatal findings grouped by source file.
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<Finding>>,
}

impl ValidationReport {
    pub fn add(&mut self, finding: Finding) {
        self.errors
            .entry(finding.source.clone())
            .or_default()
            .push(finding);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of files with at least one error.
    pub fn file_count(&self) -> usize {
        self.errors.len()
    }

    /// Total error count.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Print the report to stderr, one block per source file.
    pub fn print(&self) {
        if self.errors.is_empty() {
            return;
        }
        eprintln!();

        let file_count = self.file_count();
        let error_count = self.error_count();
        eprintln!(
            "{} {}",
            "errors".red().bold(),
            format!(
                "({file_count} file{}, {error_count} error{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (path, findings) in &self.errors {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in findings {
                if e.message.is_empty() {
                    eprintln!("{} {} {}", "→".red(), e.check.dimmed(), e.target);
                } else {
                    eprintln!(
                        "{} {} {} {}",
                        "→".red(),
                        e.check.dimmed(),
                        e.target,
                        e.message
                    );
                }
            }
        }
    }
}
