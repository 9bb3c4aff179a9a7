//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that exercises `agora_core` end to end
//!   against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use agora_core::db::open_db_in_memory;
use agora_core::{
    Notification, NotificationService, Proposal, ProposalRepository,
    SqliteNotificationRepository, SqliteProposalRepository,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("agora smoke run failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;

    let proposals = SqliteProposalRepository::try_new(&conn)?;
    let repo = SqliteNotificationRepository::try_new(&conn)?;
    let lookup = SqliteProposalRepository::try_new(&conn)?;
    let service = NotificationService::new(repo, lookup);

    let visible = Proposal::new("repave the main square");
    let moderated = Proposal::new("moderated proposal");
    proposals.create_proposal(&visible)?;
    proposals.create_proposal(&moderated)?;

    service.create_notification(
        &Notification::new(visible.uuid, "works start", "crews on site monday"),
        0,
    )?;
    service.create_notification(
        &Notification::new(moderated.uuid, "hidden soon", "should not surface"),
        0,
    )?;
    proposals.hide_proposal(moderated.uuid)?;

    let listing = service.public_for_api()?;
    println!("agora_core version={}", agora_core::core_version());
    println!("public notifications={}", listing.len());
    for notification in &listing {
        let title = service
            .notifiable_title(notification)?
            .unwrap_or_else(|| "(content unavailable)".to_string());
        println!(
            "- action={} proposal_title={title} notification_title={}",
            service.notifiable_action(),
            notification.title
        );
    }

    Ok(())
}
