//! `[future]` section: opt-in flags for upcoming engine behavior.
//!
//! # Example
//!
//! ```toml
//! [future]
//! v4 = true
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Future flags, see the engine's upgrade guide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "future")]
pub struct FutureConfig {
    /// Improve compatibility with the upcoming v4 engine.
    pub v4: bool,

    /// Faster build pipeline (experimental).
    pub experimental_faster: bool,

    /// Flags this version does not know about.
    #[serde(flatten)]
    #[config(skip)]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl FutureConfig {
    /// Unknown flags are ignored, but reported so typos do not go unnoticed.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (name, value) in &self.unknown {
            let message = if value.is_bool() {
                format!("unknown future flag `{name}` is ignored")
            } else {
                format!("unknown future flag `{name}` is ignored (flags are booleans)")
            };
            diag.warn(crate::config::FieldPath::new("future"), message);
        }
    }
}
