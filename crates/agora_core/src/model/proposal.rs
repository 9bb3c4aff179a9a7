//! Proposal snapshot model and availability outcome.
//!
//! # Responsibility
//! - Define the read-side snapshot of the parent resource notifications
//!   report on.
//! - Provide moderation lifecycle helpers (hide/restore/retire).
//!
//! # Invariants
//! - `hidden_at` is the source of truth for moderated (soft-deleted) state.
//! - `retired_at` marks administrative retirement; it blocks visibility the
//!   same way hiding does.
//! - Hard deletion is not representable here: an absent row at the lookup is
//!   the only signal of it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a proposal.
pub type ProposalId = Uuid;

/// Read-side snapshot of a proposal as seen by notification logic.
///
/// The proposal entity is owned by the surrounding application; this core
/// only ever consumes snapshots fetched through
/// [`ProposalLookup`](crate::repo::proposal_repo::ProposalLookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Stable global ID.
    pub uuid: ProposalId,
    /// Proposal headline, surfaced as notification display metadata.
    pub title: String,
    /// Moderation timestamp in epoch milliseconds. Set means hidden.
    pub hidden_at: Option<i64>,
    /// Administrative retirement timestamp in epoch milliseconds.
    pub retired_at: Option<i64>,
}

/// Tri-state outcome of resolving whether a proposal can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Present, not hidden, not retired.
    Available,
    /// Present but hidden or retired.
    Hidden,
    /// No row for this id: hard-deleted or never existed.
    Absent,
}

impl Availability {
    /// Boolean collapse: only `Available` passes.
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl Proposal {
    /// Creates a visible, non-retired proposal with a generated ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a proposal with a caller-provided stable ID.
    pub fn with_id(uuid: ProposalId, title: impl Into<String>) -> Self {
        Self {
            uuid,
            title: title.into(),
            hidden_at: None,
            retired_at: None,
        }
    }

    /// Marks this proposal as hidden at the given instant.
    pub fn hide(&mut self, at: i64) {
        self.hidden_at = Some(at);
    }

    /// Clears the hidden mark.
    pub fn restore(&mut self) {
        self.hidden_at = None;
    }

    /// Marks this proposal as administratively retired.
    pub fn retire(&mut self, at: i64) {
        self.retired_at = Some(at);
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden_at.is_some()
    }

    pub fn is_retired(&self) -> bool {
        self.retired_at.is_some()
    }
}
