//! Contact form rules and submission plumbing.
//!
//! Field rules are evaluated independently per field, first failing rule
//! wins. The browser host owns the error slots; this module only decides.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are user-correctable and reported inline through
//! [`FieldError`] messages. Submission failures become a single error toast;
//! the loading state is released by [`LoadingGuard`] on every exit path.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Deserialize;

use crate::consts::MESSAGE_MIN_CHARS;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";
pub const SUBMIT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Message must be at least {min} characters.")]
    TooShort { min: usize },
}

/// Which rule set applies to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Message,
}

impl FieldKind {
    /// Classify from the input's `type` and `name` attributes.
    #[must_use]
    pub fn classify(input_type: &str, name: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else if name == "message" {
            Self::Message
        } else {
            Self::Text
        }
    }
}

/// Snapshot of one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool, value: impl Into<String>) -> Self {
        Self { name: name.into(), kind, required, value: value.into() }
    }

    /// Id of the element that shows this field's error text.
    #[must_use]
    pub fn error_slot_id(&self) -> String {
        format!("{}-error", self.name)
    }
}

/// Check one field.
///
/// # Errors
///
/// Returns the first rule the trimmed value violates.
pub fn validate_field(field: &Field) -> Result<(), FieldError> {
    let value = field.value.trim();
    if value.is_empty() {
        return if field.required { Err(FieldError::Required) } else { Ok(()) };
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Message if value.chars().count() < MESSAGE_MIN_CHARS => {
            Err(FieldError::TooShort { min: MESSAGE_MIN_CHARS })
        }
        _ => Ok(()),
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot inside the domain
/// with at least one character on each side.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Per-field outcome of a whole-form check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormReport {
    pub fields: Vec<(String, Option<FieldError>)>,
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, err)| err.is_none())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.fields
            .iter()
            .filter_map(|(name, err)| err.as_ref().map(|e| (name.as_str(), e)))
    }

    #[must_use]
    pub fn error_for(&self, name: &str) -> Option<&FieldError> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, err)| err.as_ref())
    }
}

/// Validate every field. Submission must be blocked unless the report is
/// valid.
#[must_use]
pub fn validate_form(fields: &[Field]) -> FormReport {
    FormReport {
        fields: fields
            .iter()
            .map(|f| (f.name.clone(), validate_field(f).err()))
            .collect(),
    }
}

/// Whether typing into a field should clear its error state.
#[must_use]
pub fn clears_error_on_input(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Where a valid submission goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// POST the form data to this HTTPS endpoint.
    Remote(String),
    /// No endpoint configured; pretend after a fixed delay.
    Simulated,
}

impl SubmitTarget {
    /// A configured endpoint wins over the form's `action` attribute. Only
    /// absolute HTTPS URLs count as endpoints.
    #[must_use]
    pub fn resolve(configured: Option<&str>, form_action: Option<&str>) -> Self {
        configured
            .into_iter()
            .chain(form_action)
            .map(str::trim)
            .find(|url| url.starts_with("https://") && url.len() > "https://".len())
            .map_or(Self::Simulated, |url| Self::Remote(url.to_owned()))
    }
}

/// Anything that can show a busy state for an in-flight submission.
pub trait LoadingIndicator {
    fn set_loading(&self, loading: bool);
}

/// Holds the indicator in its loading state until dropped.
pub struct LoadingGuard<L: LoadingIndicator> {
    indicator: L,
}

impl<L: LoadingIndicator> LoadingGuard<L> {
    pub fn engage(indicator: L) -> Self {
        indicator.set_loading(true);
        Self { indicator }
    }
}

impl<L: LoadingIndicator> Drop for LoadingGuard<L> {
    fn drop(&mut self) {
        self.indicator.set_loading(false);
    }
}

#[derive(Debug, Deserialize)]
struct EndpointErrorBody {
    #[serde(default)]
    errors: Vec<EndpointError>,
}

#[derive(Debug, Deserialize)]
struct EndpointError {
    message: String,
}

/// Pull human-readable messages out of a JSON error body such as
/// `{"errors":[{"message":"..."}]}`. Returns `None` for anything else.
#[must_use]
pub fn endpoint_error_message(body: &str) -> Option<String> {
    let parsed: EndpointErrorBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return None,
    };
    let joined = parsed
        .errors
        .into_iter()
        .map(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() { None } else { Some(joined) }
}
