use thiserror::Error;

/// Failures originating from the remote catalog service.
///
/// Stored verbatim in UI state, so it is cheap to clone and comparable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No response reached the client (network, DNS, timeout).
    #[error("catalog service unreachable: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected shape.
    #[error("unexpected response from catalog service: {0}")]
    Decode(String),
    /// The service refused the payload and said why.
    #[error("rejected by catalog service: {0}")]
    ValidationRejected(String),
    /// Non-success status without an explanation.
    #[error("catalog request failed (HTTP {status})")]
    RequestFailed { status: u16 },
}

impl CatalogError {
    /// Short tag for the failure kind, independent of the detail text.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Transport(_) => "transport",
            CatalogError::Decode(_) => "decode",
            CatalogError::ValidationRejected(_) => "validation_rejected",
            CatalogError::RequestFailed { .. } => "request_failed",
        }
    }
}

/// Local draft rule violations, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormValidationError {
    #[error("Title is required")]
    Title,
    #[error("Price must be a number greater than 0")]
    Price,
    #[error("Please choose a category")]
    Category,
    /// Category present but not a catalog id. Still the category rule.
    #[error("Category must be a catalog category id")]
    CategoryNotAnId,
    #[error("Description is required")]
    Description,
    #[error("Image URL is required")]
    ImageUrl,
}
