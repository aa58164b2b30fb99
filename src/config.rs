use serde::Deserialize;

use crate::loader::ContentSource;

/// Site settings, extracted from Rocket's figment (`Rocket.toml` and
/// `ROCKET_*` environment variables).
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_content_source")]
    pub content_source: String,
    /// Public URL of the page, recorded with each contact submission.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_content_source() -> String {
    "website/content.json".to_string()
}

fn default_site_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_static_dir() -> String {
    "website/static".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            content_source: default_content_source(),
            site_url: default_site_url(),
            static_dir: default_static_dir(),
        }
    }
}

impl SiteConfig {
    pub fn source(&self) -> ContentSource {
        ContentSource::parse(&self.content_source)
    }
}
