//! Core domain logic for proposal notifications.
//!
//! Decides whether a new notification for a proposal may be created
//! (interval throttling), resolves at read time whether a notification's
//! proposal is still present and visible (availability), and filters
//! notification collections down to the externally-safe subset.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::epoch_ms_now;
pub use model::notification::{Notification, NotificationId, NotificationValidationError};
pub use model::proposal::{Availability, Proposal, ProposalId};
pub use repo::notification_repo::{NotificationRepository, SqliteNotificationRepository};
pub use repo::proposal_repo::{ProposalLookup, ProposalRepository, SqliteProposalRepository};
pub use repo::setting_repo::{
    SettingsRepository, SqliteSettingsRepository, MINIMUM_INTERVAL_KEY,
};
pub use repo::{RepoError, RepoResult};
pub use service::availability::AvailabilityResolver;
pub use service::interval_guard::{may_create, MS_PER_DAY};
pub use service::notification_service::{
    NotificationService, NotificationServiceError, PROPOSAL_NOTIFICATION_ACTION,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
