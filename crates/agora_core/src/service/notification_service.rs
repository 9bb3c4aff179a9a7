//! Notification use-case service.
//!
//! # Responsibility
//! - Gate notification creation behind field validation and the interval
//!   guard.
//! - Produce the public-safe notification listing and per-notification
//!   display metadata for host layers.
//!
//! # Invariants
//! - A rejected creation is never persisted and never escalates beyond a
//!   typed service error.
//! - The public subset preserves input order; it filters, never re-sorts.
//! - Hidden/absent proposals surface as ordinary values, not errors.

use crate::model::notification::{Notification, NotificationId, NotificationValidationError};
use crate::model::proposal::ProposalId;
use crate::repo::notification_repo::NotificationRepository;
use crate::repo::proposal_repo::ProposalLookup;
use crate::repo::{RepoError, RepoResult};
use crate::service::availability::AvailabilityResolver;
use crate::service::interval_guard;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Action label identifying this notification kind to display layers.
pub const PROPOSAL_NOTIFICATION_ACTION: &str = "proposal_notification";

/// Service error for the guarded creation path.
#[derive(Debug)]
pub enum NotificationServiceError {
    /// Required field missing or blank.
    Validation(NotificationValidationError),
    /// Proposal received a notification too recently.
    BelowMinimumInterval {
        /// Time since the most recent prior notification, in milliseconds.
        elapsed_ms: i64,
        /// Configured minimum interval, in days.
        required_days: u32,
    },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for NotificationServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::BelowMinimumInterval {
                elapsed_ms,
                required_days,
            } => write!(
                f,
                "notification rejected: {elapsed_ms}ms elapsed since the last one, minimum is {required_days} day(s)"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotificationServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::BelowMinimumInterval { .. } => None,
        }
    }
}

impl From<NotificationValidationError> for NotificationServiceError {
    fn from(value: NotificationValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for NotificationServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Use-case facade over notification persistence and proposal lookup.
pub struct NotificationService<R, P>
where
    R: NotificationRepository,
    P: ProposalLookup,
{
    repo: R,
    resolver: AvailabilityResolver<P>,
}

impl<R, P> NotificationService<R, P>
where
    R: NotificationRepository,
    P: ProposalLookup,
{
    /// Creates a service over the given repository and proposal lookup.
    pub fn new(repo: R, lookup: P) -> Self {
        Self {
            repo,
            resolver: AvailabilityResolver::new(lookup),
        }
    }

    /// The availability resolver backing this service's read-side decisions.
    pub fn resolver(&self) -> &AvailabilityResolver<P> {
        &self.resolver
    }

    /// Decides whether a notification for `proposal_id` proposed at
    /// `proposed_created_at` is admissible under the interval rule.
    ///
    /// Pure decision over the persisted history; does not write anything.
    pub fn may_create(
        &self,
        proposal_id: ProposalId,
        proposed_created_at: i64,
        minimum_interval_days: u32,
    ) -> RepoResult<bool> {
        let last = self
            .repo
            .latest_for_proposal(proposal_id)?
            .map(|prior| prior.created_at);

        Ok(interval_guard::may_create(
            proposed_created_at,
            last,
            minimum_interval_days,
        ))
    }

    /// Validates, interval-checks and persists one notification.
    ///
    /// # Errors
    /// - `Validation` when a required field is missing or blank.
    /// - `BelowMinimumInterval` when the proposal's most recent notification
    ///   is too recent. Nothing is persisted in either case.
    pub fn create_notification(
        &self,
        notification: &Notification,
        minimum_interval_days: u32,
    ) -> Result<NotificationId, NotificationServiceError> {
        notification.validate()?;

        let Some(proposal_id) = notification.proposal_id else {
            // validate() already rejects this; keep the branch total anyway.
            return Err(NotificationValidationError::MissingProposal.into());
        };

        if let Some(prior) = self.repo.latest_for_proposal(proposal_id)? {
            let admissible = interval_guard::may_create(
                notification.created_at,
                Some(prior.created_at),
                minimum_interval_days,
            );
            if !admissible {
                return Err(NotificationServiceError::BelowMinimumInterval {
                    elapsed_ms: notification.created_at - prior.created_at,
                    required_days: minimum_interval_days,
                });
            }
        }

        let id = self.repo.create_notification(notification)?;
        info!(
            "event=notification_created module=service status=ok notification={id} proposal={proposal_id}"
        );
        Ok(id)
    }

    /// Filters a notification collection down to the externally-safe subset.
    ///
    /// A notification is kept iff it references a proposal that currently
    /// resolves as available. Input order is preserved.
    pub fn public_subset(&self, notifications: Vec<Notification>) -> RepoResult<Vec<Notification>> {
        let mut visible = Vec::with_capacity(notifications.len());
        for notification in notifications {
            if self.resolver.notifiable_available(&notification)? {
                visible.push(notification);
            }
        }
        Ok(visible)
    }

    /// Lists all persisted notifications and applies the public filter.
    pub fn public_for_api(&self) -> RepoResult<Vec<Notification>> {
        let notifications = self.repo.list_notifications()?;
        self.public_subset(notifications)
    }

    /// Boolean availability of one notification's proposal.
    pub fn notifiable_available(&self, notification: &Notification) -> RepoResult<bool> {
        self.resolver.notifiable_available(notification)
    }

    /// Display title for the notification: the proposal title when the
    /// proposal is available, `None` when the host should render a
    /// content-unavailable placeholder.
    pub fn notifiable_title(&self, notification: &Notification) -> RepoResult<Option<String>> {
        let Some(proposal_id) = notification.proposal_id else {
            return Ok(None);
        };

        Ok(self
            .resolver
            .available_proposal(proposal_id)?
            .map(|proposal| proposal.title))
    }

    /// Label identifying this notification kind to display layers.
    pub fn notifiable_action(&self) -> &'static str {
        PROPOSAL_NOTIFICATION_ACTION
    }
}
