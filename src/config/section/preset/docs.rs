//! `[presets.docs]` options.

use crate::config::ConfigDiagnostics;
use crate::config::util::{check_http_url, check_relative_path};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "presets.docs")]
pub struct DocsOptions {
    /// Docs source directory, relative to the site root.
    pub path: PathBuf,

    /// URL segment the docs are served under.
    pub route_base_path: String,

    /// Sidebar definition file.
    pub sidebar_path: Option<PathBuf>,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base_path: "docs".into(),
            sidebar_path: None,
            edit_url: None,
        }
    }
}

impl DocsOptions {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_relative_path(&self.path, Self::FIELDS.path, diag);
        if let Some(sidebar) = &self.sidebar_path {
            check_relative_path(sidebar, Self::FIELDS.sidebar_path, diag);
        }
        if let Some(edit_url) = &self.edit_url {
            check_http_url(edit_url, Self::FIELDS.edit_url, diag);
        }
    }
}
