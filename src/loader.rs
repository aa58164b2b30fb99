use std::fs;
use std::time::Duration;

use log::{debug, error};
use url::Url;

use crate::error::LoadError;
use crate::models::content::ContentDocument;

/// Where the content document lives: a file on disk or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Path(String),
    Remote(Url),
}

impl ContentSource {
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                ContentSource::Remote(url)
            }
            _ => ContentSource::Path(raw.to_string()),
        }
    }
}

/// Read the content document once. Nothing is cached between calls: every
/// page load sees the current file.
pub fn load_content(source: &ContentSource) -> Result<ContentDocument, LoadError> {
    let result = match source {
        ContentSource::Path(path) => {
            let raw = fs::read_to_string(path)?;
            parse_content(&raw)
        }
        ContentSource::Remote(url) => fetch_remote(url),
    };

    match &result {
        Ok(doc) => debug!(
            "Loaded content: {} theme(s), {} service(s), {} package(s), {} lab(s)",
            doc.themes.len(),
            doc.core_services.len(),
            doc.packages.len(),
            doc.portfolio_labs.len()
        ),
        Err(e) => error!("Content load failed: {}", e),
    }
    result
}

pub fn parse_content(raw: &str) -> Result<ContentDocument, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

fn fetch_remote(url: &Url) -> Result<ContentDocument, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| LoadError::Network(format!("HTTP client error: {}", e)))?;

    let resp = client
        .get(url.clone())
        .header("Cache-Control", "no-store")
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(LoadError::Status(resp.status().as_u16()));
    }

    let body = resp.text().map_err(|e| LoadError::Network(e.to_string()))?;
    parse_content(&body)
}
