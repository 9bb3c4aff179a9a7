use agora_core::db::open_db_in_memory;
use agora_core::{
    epoch_ms_now, Availability, AvailabilityResolver, Notification, NotificationRepository,
    NotificationService, Proposal, ProposalLookup, ProposalRepository,
    SqliteNotificationRepository, SqliteProposalRepository, PROPOSAL_NOTIFICATION_ACTION,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn visible_proposal_resolves_available() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let resolver = resolver(&conn);

    assert_eq!(
        resolver.resolve(proposal.uuid).unwrap(),
        Availability::Available
    );
}

#[test]
fn hidden_proposal_resolves_hidden() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    repo.hide_proposal(proposal.uuid).unwrap();

    let resolver = resolver(&conn);
    assert_eq!(
        resolver.resolve(proposal.uuid).unwrap(),
        Availability::Hidden
    );
}

#[test]
fn retired_proposal_resolves_hidden_like_a_hidden_one() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    repo.retire_proposal(proposal.uuid, epoch_ms_now()).unwrap();

    let resolver = resolver(&conn);
    assert_eq!(
        resolver.resolve(proposal.uuid).unwrap(),
        Availability::Hidden
    );
}

#[test]
fn destroyed_proposal_resolves_absent() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    repo.destroy_proposal(proposal.uuid).unwrap();

    let resolver = resolver(&conn);
    assert_eq!(
        resolver.resolve(proposal.uuid).unwrap(),
        Availability::Absent
    );
}

#[test]
fn unknown_proposal_id_resolves_absent() {
    let conn = open_db_in_memory().unwrap();
    let resolver = resolver(&conn);

    assert_eq!(
        resolver.resolve(Uuid::new_v4()).unwrap(),
        Availability::Absent
    );
}

#[test]
fn notifiable_available_is_the_boolean_collapse_of_resolve() {
    let conn = open_db_in_memory().unwrap();
    let visible = seed_proposal(&conn, "visible");
    let hidden = seed_proposal(&conn, "hidden");
    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    repo.hide_proposal(hidden.uuid).unwrap();

    let resolver = resolver(&conn);
    let for_visible = Notification::new(visible.uuid, "n", "b");
    let for_hidden = Notification::new(hidden.uuid, "n", "b");
    let detached = Notification::detached("n", "b");

    assert!(resolver.notifiable_available(&for_visible).unwrap());
    assert!(!resolver.notifiable_available(&for_hidden).unwrap());
    assert!(!resolver.notifiable_available(&detached).unwrap());
}

#[test]
fn check_availability_reverifies_presence_instead_of_trusting_the_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    let resolver = resolver(&conn);

    // The caller holds a snapshot fetched before anything changed.
    let snapshot = repo.fetch_proposal(proposal.uuid).unwrap().unwrap();
    assert!(resolver.check_availability(&snapshot).unwrap());

    // The snapshot still claims visibility, but the row has been destroyed.
    repo.destroy_proposal(proposal.uuid).unwrap();
    assert!(!snapshot.is_hidden());
    assert!(!resolver.check_availability(&snapshot).unwrap());
}

#[test]
fn check_availability_sees_hiding_that_happened_after_the_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    let resolver = resolver(&conn);

    let snapshot = repo.fetch_proposal(proposal.uuid).unwrap().unwrap();
    repo.hide_proposal(proposal.uuid).unwrap();

    assert!(!resolver.check_availability(&snapshot).unwrap());
}

#[test]
fn restored_proposal_becomes_available_again() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    let resolver = resolver(&conn);

    repo.hide_proposal(proposal.uuid).unwrap();
    assert_eq!(
        resolver.resolve(proposal.uuid).unwrap(),
        Availability::Hidden
    );

    repo.restore_proposal(proposal.uuid).unwrap();
    assert_eq!(
        resolver.resolve(proposal.uuid).unwrap(),
        Availability::Available
    );
}

#[test]
fn notifiable_title_returns_the_proposal_title_when_available() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park renovation");
    let service = service(&conn);

    let notification = Notification::new(proposal.uuid, "update", "body");
    service.create_notification(&notification, 0).unwrap();

    assert_eq!(
        service.notifiable_title(&notification).unwrap().as_deref(),
        Some("city park renovation")
    );
}

#[test]
fn notifiable_title_is_none_when_the_proposal_is_unavailable() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park renovation");
    let service = service(&conn);
    let notification = Notification::new(proposal.uuid, "update", "body");
    service.create_notification(&notification, 0).unwrap();

    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    repo.hide_proposal(proposal.uuid).unwrap();

    assert_eq!(service.notifiable_title(&notification).unwrap(), None);
    assert!(!service.notifiable_available(&notification).unwrap());
}

#[test]
fn notifiable_action_labels_the_notification_kind() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(service.notifiable_action(), "proposal_notification");
    assert_eq!(service.notifiable_action(), PROPOSAL_NOTIFICATION_ACTION);
}

#[test]
fn availability_survives_a_dangling_reference_after_hard_delete() {
    let conn = open_db_in_memory().unwrap();
    let proposal = seed_proposal(&conn, "city park");
    let service = service(&conn);

    let notification = Notification::new(proposal.uuid, "update", "body");
    service.create_notification(&notification, 0).unwrap();

    let repo = SqliteProposalRepository::try_new(&conn).unwrap();
    repo.destroy_proposal(proposal.uuid).unwrap();

    // The persisted row still references the destroyed proposal.
    let notifications = SqliteNotificationRepository::try_new(&conn).unwrap();
    let stored = notifications
        .get_notification(notification.uuid)
        .unwrap()
        .unwrap();
    assert_eq!(stored.proposal_id, Some(proposal.uuid));

    assert!(!service.notifiable_available(&stored).unwrap());
    assert_eq!(service.notifiable_title(&stored).unwrap(), None);
}

fn resolver(conn: &Connection) -> AvailabilityResolver<SqliteProposalRepository<'_>> {
    AvailabilityResolver::new(SqliteProposalRepository::try_new(conn).unwrap())
}

fn service(
    conn: &Connection,
) -> NotificationService<SqliteNotificationRepository<'_>, SqliteProposalRepository<'_>> {
    let repo = SqliteNotificationRepository::try_new(conn).unwrap();
    let lookup = SqliteProposalRepository::try_new(conn).unwrap();
    NotificationService::new(repo, lookup)
}

fn seed_proposal(conn: &Connection, title: &str) -> Proposal {
    let repo = SqliteProposalRepository::try_new(conn).unwrap();
    let proposal = Proposal::new(title);
    repo.create_proposal(&proposal).unwrap();
    proposal
}
