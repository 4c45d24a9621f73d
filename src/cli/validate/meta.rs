//! Post front matter and the blog's tags / authors definition files.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Front matter fields the checks look at. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub slug: Option<String>,
    pub tags: Vec<TagRef>,
    pub authors: Option<Authors>,
    /// Legacy single inline author.
    pub author: Option<String>,
}

/// A post tag: a key into the tags file, or an inline definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagRef {
    Key(String),
    Inline {
        label: String,
        #[serde(default)]
        permalink: Option<String>,
    },
}

/// `authors: key`, `authors: [key, {...}]` or a single inline table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    One(AuthorRef),
    Many(Vec<AuthorRef>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Key(String),
    Inline(serde_yaml::Mapping),
}

impl AuthorRef {
    /// Display name for reports.
    pub fn name(&self) -> String {
        match self {
            Self::Key(key) => key.clone(),
            Self::Inline(map) => map
                .get("name")
                .and_then(serde_yaml::Value::as_str)
                .unwrap_or("(unnamed)")
                .to_string(),
        }
    }
}

impl FrontMatter {
    pub fn authors(&self) -> Vec<AuthorRef> {
        let mut authors = match &self.authors {
            Some(Authors::One(author)) => vec![author.clone()],
            Some(Authors::Many(authors)) => authors.clone(),
            None => Vec::new(),
        };
        if let Some(name) = &self.author {
            let mut map = serde_yaml::Mapping::new();
            map.insert("name".into(), name.as_str().into());
            authors.push(AuthorRef::Inline(map));
        }
        authors
    }
}

/// Split `---` delimited YAML front matter from the body.
///
/// Returns `(None, content)` when the file has no front matter.
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Parse front matter, treating an empty block as all defaults.
pub fn parse_front_matter(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}

/// One entry of the tags file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TagDefinition {
    pub label: Option<String>,
    pub permalink: Option<String>,
    pub description: Option<String>,
}

/// Tags file contents keyed by tag key. `None` when the file does not exist.
pub fn load_tags(path: &Path) -> Result<Option<BTreeMap<String, TagDefinition>>> {
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };
    let tags: BTreeMap<String, Option<TagDefinition>> = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse tags file '{}'", path.display()))?;
    Ok(Some(
        tags.into_iter()
            .map(|(key, def)| (key, def.unwrap_or_default()))
            .collect(),
    ))
}

/// Author keys defined in the authors map. `None` when the file does not exist.
pub fn load_author_keys(path: &Path) -> Result<Option<Vec<String>>> {
    let Some(content) = read_optional(path)? else {
        return Ok(None);
    };
    let authors: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse authors map '{}'", path.display()))?;
    Ok(Some(authors.into_keys().collect()))
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read '{}'", path.display()))
}

/// URL segment for a tag label: lowercase alphanumerics, every other run
/// of characters becomes one dash (`Rust/Go` -> `rust-go`).
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
