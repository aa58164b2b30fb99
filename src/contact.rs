use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, error, info, warn};
use serde::Serialize;

use crate::error::{SubmitError, TransportError};
use crate::models::page::{Notice, Page, SUBMIT_LABEL};
use crate::theme::UiState;

pub const PENDING_LABEL: &str = "Sending…";
pub const SUCCESS_MESSAGE: &str = "Submitted. You’ll receive a reply with next steps.";

pub const TIMELINE_PLACEHOLDER: &str = "Select timeline";
pub const TIMELINE_OPTIONS: &[&str] = &["ASAP", "2–4 weeks", "1–2 months", "Flexible"];

/// Payload posted to the contact webhook. Every field is a string.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub timestamp: String,
    pub page: String,
    pub theme: String,
    pub name: String,
    pub email: String,
    pub service: String,
    pub timeline: String,
    pub message: String,
}

impl SubmissionRecord {
    pub fn from_page(page: &Page, theme: &str, page_url: &str, at: DateTime<Utc>) -> Self {
        let form = &page.contact;
        SubmissionRecord {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            page: page_url.to_string(),
            theme: theme.to_string(),
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            service: page.service_select.value.clone().unwrap_or_default(),
            timeline: form.timeline.clone(),
            message: form.message.trim().to_string(),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("service", &self.service),
            ("timeline", &self.timeline),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(k, _)| k)
        .collect()
    }
}

/// Sends a serialized record to the webhook.
///
/// The transport is response-opaque: `Ok` only means the request went out
/// without a transport failure. Whether the remote side accepted the data
/// is unknowable from here.
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, endpoint: &str, body: String) -> Result<(), TransportError>;
}

pub struct HttpDispatcher;

impl Dispatcher for HttpDispatcher {
    fn dispatch(&self, endpoint: &str, body: String) -> Result<(), TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TransportError::new(format!("HTTP client error: {}", e)))?;

        // Opaque transport: status and body are never read.
        client
            .post(endpoint)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body)
            .send()
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Drives one contact form through `Idle -> Submitting -> {Succeeded, Failed} -> Idle`.
pub struct ContactHandler {
    state: SubmitState,
    transitions: Vec<SubmitState>,
}

impl Default for ContactHandler {
    fn default() -> Self {
        ContactHandler {
            state: SubmitState::Idle,
            transitions: Vec::new(),
        }
    }
}

impl ContactHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Every state entered since construction, in order.
    pub fn transitions(&self) -> &[SubmitState] {
        &self.transitions
    }

    fn enter(&mut self, next: SubmitState) {
        debug!("Contact form: {:?} -> {:?}", self.state, next);
        self.state = next;
        self.transitions.push(next);
    }

    /// Handle one submit of the page's contact form. The outcome is also
    /// written to `page.notice` for the visitor.
    pub fn submit(
        &mut self,
        page: &mut Page,
        ui: &UiState,
        page_url: &str,
        dispatcher: &dyn Dispatcher,
    ) -> Result<(), SubmitError> {
        let endpoint = match ui.content.gas_url() {
            Some(url) => url.to_string(),
            None => {
                warn!("Contact submit rejected: no gas_url configured");
                return Err(report(page, SubmitError::Configuration));
            }
        };

        let record = SubmissionRecord::from_page(page, &ui.active_theme_id, page_url, Utc::now());
        let missing = record.missing_fields();
        if !missing.is_empty() {
            debug!("Contact submit rejected, missing: {}", missing.join(", "));
            return Err(report(page, SubmitError::Validation { missing }));
        }

        self.enter(SubmitState::Submitting);
        let original_label = page.contact.submit.label.clone();
        page.contact.submit.disabled = true;
        page.contact.submit.label = PENDING_LABEL.to_string();

        let outcome = serde_json::to_string(&record)
            .map_err(|e| TransportError::new(format!("Serialize error: {}", e)))
            .and_then(|body| dispatcher.dispatch(&endpoint, body));

        let result = match outcome {
            Ok(()) => {
                info!("Contact submission dispatched (theme {})", record.theme);
                reset_form(page);
                page.notice = Some(Notice::success(SUCCESS_MESSAGE));
                self.enter(SubmitState::Succeeded);
                Ok(())
            }
            Err(e) => {
                error!("Contact submission failed: {}", e);
                self.enter(SubmitState::Failed);
                Err(report(page, SubmitError::Transport(e)))
            }
        };

        page.contact.submit.disabled = false;
        page.contact.submit.label = if original_label.is_empty() {
            SUBMIT_LABEL.to_string()
        } else {
            original_label
        };
        self.enter(SubmitState::Idle);

        result
    }
}

fn report(page: &mut Page, err: SubmitError) -> SubmitError {
    page.notice = Some(Notice::error(err.to_string()));
    err
}

fn reset_form(page: &mut Page) {
    let form = &mut page.contact;
    form.name.clear();
    form.email.clear();
    form.timeline.clear();
    form.message.clear();
    page.service_select.value = None;
}
