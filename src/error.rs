//! Error types for the browser crate.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a contact form submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint answered {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },
    #[error("form data unavailable: {0}")]
    Dom(String),
}
