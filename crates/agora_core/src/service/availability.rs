//! Availability resolution for notification parent resources.
//!
//! # Responsibility
//! - Resolve, at read time, whether a proposal referenced by a notification
//!   is present, visible and not retired.
//!
//! # Invariants
//! - An absent or hard-deleted proposal is a normal outcome (`Absent`),
//!   never an error or a panic.
//! - Retirement blocks visibility exactly like hiding does.
//! - Caller-held snapshots are never trusted; presence is re-verified by id.

use crate::model::notification::Notification;
use crate::model::proposal::{Availability, Proposal, ProposalId};
use crate::repo::proposal_repo::ProposalLookup;
use crate::repo::RepoResult;

/// Resolves proposal availability through a [`ProposalLookup`].
pub struct AvailabilityResolver<P: ProposalLookup> {
    lookup: P,
}

impl<P: ProposalLookup> AvailabilityResolver<P> {
    /// Creates a resolver over the provided lookup implementation.
    pub fn new(lookup: P) -> Self {
        Self { lookup }
    }

    /// Resolves the tri-state availability outcome for one proposal id.
    pub fn resolve(&self, proposal_id: ProposalId) -> RepoResult<Availability> {
        let Some(proposal) = self.lookup.fetch_proposal(proposal_id)? else {
            return Ok(Availability::Absent);
        };

        if proposal.is_hidden() || proposal.is_retired() {
            return Ok(Availability::Hidden);
        }

        Ok(Availability::Available)
    }

    /// Boolean collapse of [`resolve`](Self::resolve) for one notification.
    ///
    /// Notifications without a proposal reference are never available.
    pub fn notifiable_available(&self, notification: &Notification) -> RepoResult<bool> {
        match notification.proposal_id {
            None => Ok(false),
            Some(proposal_id) => Ok(self.resolve(proposal_id)?.is_available()),
        }
    }

    /// Checks availability given an already-fetched proposal snapshot.
    ///
    /// The snapshot may be stale (the row can have been hidden, retired or
    /// hard-deleted since it was read), so presence is re-verified by id
    /// rather than trusting the snapshot fields.
    pub fn check_availability(&self, proposal: &Proposal) -> RepoResult<bool> {
        Ok(self.resolve(proposal.uuid)?.is_available())
    }

    /// Fetches the proposal snapshot only when it currently resolves as
    /// available. Used for display metadata.
    pub fn available_proposal(&self, proposal_id: ProposalId) -> RepoResult<Option<Proposal>> {
        let Some(proposal) = self.lookup.fetch_proposal(proposal_id)? else {
            return Ok(None);
        };

        if proposal.is_hidden() || proposal.is_retired() {
            return Ok(None);
        }

        Ok(Some(proposal))
    }
}
