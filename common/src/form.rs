//! Product creation form controller.
//!
//! Owns the draft, the image preview and the submission lifecycle:
//!
//! ```text
//! Idle ──submit (valid)──▶ Submitting ──response──▶ Settled(Success | Failure)
//!  ▲                                                   │
//!  └──────────── edit / new submit / dismiss ──────────┘
//! ```
//!
//! A submit while `Submitting` is ignored. The guard is checked synchronously
//! before the request is issued, which is enough on a single-threaded loop.
//! Cancelling drops back to `Idle`; the answer to the abandoned attempt is
//! then discarded without touching the form or asking for navigation.

use crate::api::CatalogApi;
use crate::cell::StateCell;
use crate::draft::{DraftField, ProductDraft};
use crate::error::{CatalogError, FormValidationError};
use crate::product::{NewProduct, Product};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success(Product),
    Failure(CatalogError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Settled(SubmitOutcome),
}

/// Route change the form asks its host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Product listing, after a successful create.
    Products,
    /// Wherever the user came from.
    Back,
}

/// Result of asking the form to start a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum BeginSubmit {
    /// Now `Submitting`; send this payload.
    Ready(NewProduct),
    /// Draft broke a rule; nothing was sent and the state is unchanged.
    Invalid(FormValidationError),
    /// An attempt is already in flight.
    Busy,
}

/// What a call to [`submit`] ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    Created {
        product: Product,
        navigate: Navigation,
    },
    Failed(CatalogError),
    Invalid(FormValidationError),
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    draft: ProductDraft,
    state: SubmissionState,
    image_preview_url: String,
    violation: Option<FormValidationError>,
    /// Bumped by every started or cancelled attempt; a response only settles
    /// the attempt it was sent for.
    attempt: u64,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// Raw image URL as typed, for the preview. Never validated.
    pub fn image_preview_url(&self) -> &str {
        &self.image_preview_url
    }

    /// Rule broken by the last rejected submit, until the next edit.
    pub fn violation(&self) -> Option<FormValidationError> {
        self.violation
    }

    /// Failure reason of the last settled attempt, if it failed.
    pub fn failure(&self) -> Option<&CatalogError> {
        match &self.state {
            SubmissionState::Settled(SubmitOutcome::Failure(err)) => Some(err),
            _ => None,
        }
    }

    /// Overwrite one draft field. The image field also drives the preview.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        if field == DraftField::ImageUrl {
            self.image_preview_url.clone_from(&value);
        }
        self.draft.set(field, value);
        self.violation = None;
        if matches!(self.state, SubmissionState::Settled(_)) {
            self.state = SubmissionState::Idle;
        }
    }

    pub fn validate(&self) -> Result<(), FormValidationError> {
        self.draft.validate()
    }

    /// Leave a settled outcome behind and return to `Idle`.
    pub fn dismiss_outcome(&mut self) {
        if matches!(self.state, SubmissionState::Settled(_)) {
            self.state = SubmissionState::Idle;
        }
    }

    pub fn begin_submit(&mut self) -> BeginSubmit {
        if self.is_submitting() {
            return BeginSubmit::Busy;
        }
        match self.draft.to_payload() {
            Ok(payload) => {
                self.violation = None;
                self.state = SubmissionState::Submitting;
                self.attempt += 1;
                BeginSubmit::Ready(payload)
            }
            Err(rule) => {
                self.violation = Some(rule);
                BeginSubmit::Invalid(rule)
            }
        }
    }

    /// Record the service's answer. On success the draft is discarded and
    /// the host is asked to show the product list.
    pub fn settle(&mut self, result: Result<Product, CatalogError>) -> Option<Navigation> {
        if !self.is_submitting() {
            return None;
        }
        match result {
            Ok(product) => {
                self.draft = ProductDraft::default();
                self.image_preview_url.clear();
                self.state = SubmissionState::Settled(SubmitOutcome::Success(product));
                Some(Navigation::Products)
            }
            Err(err) => {
                self.state = SubmissionState::Settled(SubmitOutcome::Failure(err));
                None
            }
        }
    }

    /// Abandon the form. The draft is discarded and any attempt in flight
    /// is forgotten.
    pub fn cancel(&mut self) -> Navigation {
        self.draft = ProductDraft::default();
        self.image_preview_url.clear();
        self.violation = None;
        self.state = SubmissionState::Idle;
        self.attempt += 1;
        Navigation::Back
    }
}

/// Validate, send and settle one creation attempt.
pub async fn submit<A, S>(api: &A, form: &S) -> SubmitResult
where
    A: CatalogApi,
    S: StateCell<ProductForm>,
{
    let (begin, attempt) = form.update(|f| (f.begin_submit(), f.attempt));
    let payload = match begin {
        BeginSubmit::Ready(payload) => payload,
        BeginSubmit::Invalid(rule) => {
            tracing::debug!(%rule, "draft rejected locally");
            return SubmitResult::Invalid(rule);
        }
        BeginSubmit::Busy => {
            tracing::debug!("submission already in flight");
            return SubmitResult::Ignored;
        }
    };

    let result = api.create_product(&payload).await;
    match &result {
        Ok(product) => tracing::info!(id = %product.id, title = %product.title, "product created"),
        Err(err) => tracing::warn!(error = %err, kind = err.kind(), "product creation failed"),
    }

    let outcome = result.clone();
    let settled = form.update(|f| (f.attempt == attempt).then(|| f.settle(result)));
    match (settled, outcome) {
        (Some(Some(navigate)), Ok(product)) => SubmitResult::Created { product, navigate },
        (Some(_), Err(err)) => SubmitResult::Failed(err),
        _ => {
            tracing::debug!("form cancelled before the response arrived");
            SubmitResult::Ignored
        }
    }
}
