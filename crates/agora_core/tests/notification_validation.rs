use agora_core::db::open_db_in_memory;
use agora_core::{
    Notification, NotificationRepository, NotificationService, NotificationServiceError,
    NotificationValidationError, Proposal, ProposalRepository, RepoError,
    SqliteNotificationRepository, SqliteProposalRepository,
};
use rusqlite::Connection;

#[test]
fn complete_notification_persists() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn);
    let repo = SqliteNotificationRepository::try_new(&conn).unwrap();

    let notification = Notification::new(proposal.uuid, "update", "body");
    let id = repo.create_notification(&notification).unwrap();

    let stored = repo.get_notification(id).unwrap().unwrap();
    assert_eq!(stored, notification);
}

#[test]
fn blank_title_is_rejected_by_the_validated_path() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn);
    let repo = SqliteNotificationRepository::try_new(&conn).unwrap();

    let notification = Notification::new(proposal.uuid, "  ", "body");
    let err = repo.create_notification(&notification).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(NotificationValidationError::EmptyTitle)
    ));
    assert!(repo.get_notification(notification.uuid).unwrap().is_none());
}

#[test]
fn blank_body_is_rejected_by_the_validated_path() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn);
    let repo = SqliteNotificationRepository::try_new(&conn).unwrap();

    let notification = Notification::new(proposal.uuid, "update", "");
    let err = repo.create_notification(&notification).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(NotificationValidationError::EmptyBody)
    ));
}

#[test]
fn missing_proposal_is_rejected_by_the_validated_path() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotificationRepository::try_new(&conn).unwrap();

    let notification = Notification::detached("update", "body");
    let err = repo.create_notification(&notification).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(NotificationValidationError::MissingProposal)
    ));
}

#[test]
fn service_surfaces_validation_failures_as_service_errors() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn);
    let repo = SqliteNotificationRepository::try_new(&conn).unwrap();
    let lookup = SqliteProposalRepository::try_new(&conn).unwrap();
    let service = NotificationService::new(repo, lookup);

    let notification = Notification::new(proposal.uuid, "", "body");
    let err = service.create_notification(&notification, 0).unwrap_err();
    assert!(matches!(
        err,
        NotificationServiceError::Validation(NotificationValidationError::EmptyTitle)
    ));
}

#[test]
fn unchecked_path_persists_an_invalid_row_that_reads_back_safely() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNotificationRepository::try_new(&conn).unwrap();

    let detached = Notification::detached("stray", "body");
    repo.create_notification_unchecked(&detached).unwrap();

    let stored = repo.get_notification(detached.uuid).unwrap().unwrap();
    assert_eq!(stored.proposal_id, None);
    assert!(stored.validate().is_err());

    // Read-side listing stays total over the invalid row.
    let all = repo.list_notifications().unwrap();
    assert_eq!(all.len(), 1);
}

fn seed_proposal(conn: &Connection) -> Proposal {
    let repo = SqliteProposalRepository::try_new(conn).unwrap();
    let proposal = Proposal::new("neighborhood cleanup");
    repo.create_proposal(&proposal).unwrap();
    proposal
}
