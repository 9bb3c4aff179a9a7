//! Notification repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence and history queries over the `notifications` table.
//! - Keep the interval rule's only data dependency (`latest_for_proposal`)
//!   behind a stable contract.
//!
//! # Invariants
//! - `create_notification` validates field presence before inserting.
//! - `create_notification_unchecked` is the only path that can persist rows
//!   failing validation; read paths must stay total over such rows.
//! - Listing order is `created_at DESC, uuid ASC`.

use crate::model::notification::{Notification, NotificationId};
use crate::model::proposal::ProposalId;
use crate::repo::{ensure_connection_ready, parse_uuid_column, RepoResult};
use rusqlite::{params, Connection, Row};

const NOTIFICATION_SELECT_SQL: &str = "SELECT
    uuid,
    proposal_id,
    title,
    body,
    created_at
FROM notifications";

/// Repository interface for notification persistence and history queries.
pub trait NotificationRepository {
    /// Validates and inserts one notification, returning its stable id.
    fn create_notification(&self, notification: &Notification) -> RepoResult<NotificationId>;
    /// Inserts without validation. Exists to mirror bypassed-validation
    /// writes (backfills, defensive test fixtures); never use for user input.
    fn create_notification_unchecked(
        &self,
        notification: &Notification,
    ) -> RepoResult<NotificationId>;
    /// Gets one notification by id.
    fn get_notification(&self, id: NotificationId) -> RepoResult<Option<Notification>>;
    /// Lists all notifications, newest first.
    fn list_notifications(&self) -> RepoResult<Vec<Notification>>;
    /// Returns the most recent prior notification for a proposal, if any.
    fn latest_for_proposal(&self, proposal_id: ProposalId) -> RepoResult<Option<Notification>>;
}

/// SQLite-backed notification repository.
pub struct SqliteNotificationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNotificationRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "notifications")?;
        Ok(Self { conn })
    }

    fn insert(&self, notification: &Notification) -> RepoResult<NotificationId> {
        self.conn.execute(
            "INSERT INTO notifications (uuid, proposal_id, title, body, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                notification.uuid.to_string(),
                notification.proposal_id.map(|id| id.to_string()),
                notification.title.as_str(),
                notification.body.as_str(),
                notification.created_at,
            ],
        )?;

        Ok(notification.uuid)
    }
}

impl NotificationRepository for SqliteNotificationRepository<'_> {
    fn create_notification(&self, notification: &Notification) -> RepoResult<NotificationId> {
        notification.validate()?;
        self.insert(notification)
    }

    fn create_notification_unchecked(
        &self,
        notification: &Notification,
    ) -> RepoResult<NotificationId> {
        self.insert(notification)
    }

    fn get_notification(&self, id: NotificationId) -> RepoResult<Option<Notification>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTIFICATION_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_notification_row(row)?));
        }

        Ok(None)
    }

    fn list_notifications(&self) -> RepoResult<Vec<Notification>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTIFICATION_SELECT_SQL} ORDER BY created_at DESC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut notifications = Vec::new();
        while let Some(row) = rows.next()? {
            notifications.push(parse_notification_row(row)?);
        }

        Ok(notifications)
    }

    fn latest_for_proposal(&self, proposal_id: ProposalId) -> RepoResult<Option<Notification>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTIFICATION_SELECT_SQL}
             WHERE proposal_id = ?1
             ORDER BY created_at DESC, uuid ASC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query([proposal_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_notification_row(row)?));
        }

        Ok(None)
    }
}

fn parse_notification_row(row: &Row<'_>) -> RepoResult<Notification> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid_column(&uuid_text, "notifications.uuid")?;

    let proposal_id = match row.get::<_, Option<String>>("proposal_id")? {
        Some(value) => Some(parse_uuid_column(&value, "notifications.proposal_id")?),
        None => None,
    };

    Ok(Notification {
        uuid,
        proposal_id,
        title: row.get("title")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
    })
}
