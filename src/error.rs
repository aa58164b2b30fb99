use thiserror::Error;

/// The content document could not be read or parsed. Fatal to normal rendering.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read content document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load content document ({0})")]
    Status(u16),

    #[error("Network error loading content document: {0}")]
    Network(String),

    #[error("Content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Content loader task failed: {0}")]
    Task(String),
}

/// Contact form outcomes that are reported to the visitor. All recoverable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Form endpoint is not configured (missing gas_url).")]
    Configuration,

    #[error("Please complete all fields.")]
    Validation { missing: Vec<&'static str> },

    #[error("Submission failed. Please email BAG Digital directly.")]
    Transport(#[from] TransportError),
}

/// The webhook request never left, or the connection failed mid-flight.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Dispatch failed: {reason}")]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        TransportError { reason: reason.into() }
    }
}
