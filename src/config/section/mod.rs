//! Configuration section definitions.
//!
//! Each module corresponds to a section in `quire.toml`:
//!
//! | Module   | TOML Section     | Purpose                                 |
//! |----------|------------------|-----------------------------------------|
//! | `future` | `[future]`       | Opt-in flags for upcoming behavior      |
//! | `i18n`   | `[i18n]`         | Default locale and locale list          |
//! | `policy` | (top-level keys) | `ignore` / `warn` / `throw` severities  |
//! | `preset` | `[[presets]]`    | Docs, blog and theme option bundles     |
//! | `theme`  | `[theme_config]` | Navbar, footer, code highlighting       |

mod future;
mod i18n;
mod policy;
pub mod preset;
pub mod theme;

pub use future::FutureConfig;
pub use i18n::I18nConfig;
pub use policy::ReportingSeverity;
pub use preset::{BlogOptions, DocsOptions, FeedOptions, Preset, PresetName, ThemeOptions};
pub use theme::{NavbarConfig, ThemeConfig};
