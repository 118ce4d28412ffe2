//! Application configuration.
//!
//! There is no environment to read from in the browser, so configuration is a
//! typed struct with defaults. Chart layout and export styling come from the
//! `radar` crate's own config types.

use radar::geometry::RadarConfig;
use radar::svg::ExportStyle;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
pub const DEFAULT_TEMPLATE_ID: &str = "engl";
pub const DOCUMENT_MIME_TYPE: &str = "application/msword";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory (relative URL) that holds `<id>.json` templates.
    pub template_dir: String,
    /// Template loaded on startup.
    pub default_template: String,
    pub mime_type: String,
    pub radar: RadarConfig,
    pub export_style: ExportStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template_dir: DEFAULT_TEMPLATE_DIR.to_owned(),
            default_template: DEFAULT_TEMPLATE_ID.to_owned(),
            mime_type: DOCUMENT_MIME_TYPE.to_owned(),
            radar: RadarConfig::default(),
            export_style: ExportStyle::default(),
        }
    }
}

impl AppConfig {
    /// URL of the template named `id`.
    #[must_use]
    pub fn template_url(&self, id: &str) -> String {
        let dir = self.template_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{id}.json")
        } else {
            format!("{dir}/{id}.json")
        }
    }
}
