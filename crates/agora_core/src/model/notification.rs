//! Notification domain model.
//!
//! # Responsibility
//! - Define the throttled notification record and its field-presence rules.
//! - Provide constructors for the normal and the backdated creation paths.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another notification.
//! - `created_at` is assigned at construction and immutable afterward; no
//!   repository write path updates it.
//! - `proposal_id = None` is representable but never valid: such rows can
//!   only be persisted through the unchecked write path and read-side logic
//!   must tolerate them.

use crate::model::epoch_ms_now;
use crate::model::proposal::ProposalId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a notification.
pub type NotificationId = Uuid;

/// A time-gated notification attached to a proposal.
///
/// Many notifications may reference the same proposal; the proposal itself
/// is owned elsewhere and is only referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable global ID.
    pub uuid: NotificationId,
    /// Owning proposal. `None` only occurs via the unchecked write path.
    pub proposal_id: Option<ProposalId>,
    /// Required headline text.
    pub title: String,
    /// Required body text.
    pub body: String,
    /// Creation instant in Unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
}

/// Field-presence violations detected by [`Notification::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Body is empty or whitespace-only.
    EmptyBody,
    /// No proposal reference.
    MissingProposal,
}

impl Display for NotificationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "notification title must not be blank"),
            Self::EmptyBody => write!(f, "notification body must not be blank"),
            Self::MissingProposal => write!(f, "notification must reference a proposal"),
        }
    }
}

impl Error for NotificationValidationError {}

impl Notification {
    /// Creates a notification for `proposal_id` timestamped now.
    pub fn new(
        proposal_id: ProposalId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::with_created_at(proposal_id, title, body, epoch_ms_now())
    }

    /// Creates a notification with an explicit creation instant.
    ///
    /// Used by import paths and by tests that need prior notifications at a
    /// known point in the past.
    pub fn with_created_at(
        proposal_id: ProposalId,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            proposal_id: Some(proposal_id),
            title: title.into(),
            body: body.into(),
            created_at,
        }
    }

    /// Creates a notification with no proposal reference.
    ///
    /// Never valid; exists so defensive read-path behavior around bypassed
    /// validation can be exercised.
    pub fn detached(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            proposal_id: None,
            title: title.into(),
            body: body.into(),
            created_at: epoch_ms_now(),
        }
    }

    /// Checks field-presence rules required by the validated creation path.
    pub fn validate(&self) -> Result<(), NotificationValidationError> {
        if self.title.trim().is_empty() {
            return Err(NotificationValidationError::EmptyTitle);
        }
        if self.body.trim().is_empty() {
            return Err(NotificationValidationError::EmptyBody);
        }
        if self.proposal_id.is_none() {
            return Err(NotificationValidationError::MissingProposal);
        }
        Ok(())
    }
}
