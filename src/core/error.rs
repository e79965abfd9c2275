use thiserror::Error;

/// Errors that can occur while building, validating or storing documents.
///
/// Tax and amount-in-words computations never fail and have no variant here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Quotation number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// No stored record with the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// A stored record with the same id already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Snapshot serialization or parsing failed.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "seller.gst_number").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule ID if applicable (e.g. "REQ-SELLER-NAME").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

/// Join validation errors into a single [`InvoiceError::Validation`].
pub(crate) fn join_errors(errors: &[ValidationError]) -> InvoiceError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    InvoiceError::Validation(msg)
}
