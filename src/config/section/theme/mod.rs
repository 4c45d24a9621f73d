//! `[theme_config]` section: parameters for the presentation layer.
//!
//! # Example
//!
//! ```toml
//! [theme_config]
//! image = "img/social-card.jpg"
//!
//! [theme_config.navbar]
//! title = "My Blog"
//!
//! [theme_config.footer]
//! style = "dark"
//!
//! [theme_config.prism]
//! additional_languages = ["rust"]
//! ```

pub mod footer;
mod link;
pub mod navbar;
pub mod prism;

pub use footer::FooterConfig;
pub use navbar::NavbarConfig;
pub use prism::PrismConfig;

use crate::config::ConfigDiagnostics;
use crate::core::LinkKind;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme_config")]
pub struct ThemeConfig {
    /// Social card image: absolute URL or path inside a static directory.
    pub image: Option<String>,

    /// Top navigation bar.
    #[config(sub)]
    pub navbar: NavbarConfig,

    /// Page footer.
    #[config(sub)]
    pub footer: FooterConfig,

    /// Code block highlighting.
    #[config(sub)]
    pub prism: PrismConfig,
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(image) = &self.image {
            match LinkKind::parse(image) {
                LinkKind::External(_) => {
                    crate::config::util::check_http_url(image, Self::FIELDS.image, diag);
                }
                _ => crate::config::util::check_relative_path(
                    Path::new(image.trim_start_matches('/')),
                    Self::FIELDS.image,
                    diag,
                ),
            }
        }

        self.navbar.validate(diag);
        self.footer.validate(diag);
        self.prism.validate(diag);
    }

    /// Every site route referenced from theme links.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.navbar.routes().chain(self.footer.routes())
    }
}
