//! Proposal lookup contract, moderation lifecycle and SQLite implementation.
//!
//! # Responsibility
//! - Provide the read-side lookup the availability rule depends on.
//! - Provide the moderation writes (hide/restore/retire/destroy) that drive
//!   read-time resolution outcomes.
//!
//! # Invariants
//! - `fetch_proposal` returns hidden and retired rows; it returns `None`
//!   only when the row is absent (hard-deleted or never existed).
//! - `destroy_proposal` removes the row outright; referencing notifications
//!   are deliberately left dangling.

use crate::model::proposal::{Proposal, ProposalId};
use crate::repo::{ensure_connection_ready, parse_uuid_column, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PROPOSAL_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    hidden_at,
    retired_at
FROM proposals";

/// Read-side capability seam for resolving a notification's parent resource.
///
/// Proposals are the only notifiable kind today; another resource kind would
/// plug in by implementing this trait over its own storage.
pub trait ProposalLookup {
    /// Fetches the current snapshot for `id`, including hidden/retired rows.
    /// `None` means the resource is gone (hard-deleted) or never existed.
    fn fetch_proposal(&self, id: ProposalId) -> RepoResult<Option<Proposal>>;
}

/// Repository interface for proposal persistence and moderation.
pub trait ProposalRepository: ProposalLookup {
    /// Inserts one proposal and returns its stable id.
    fn create_proposal(&self, proposal: &Proposal) -> RepoResult<ProposalId>;
    /// Sets `hidden_at` to the current instant (moderation soft delete).
    fn hide_proposal(&self, id: ProposalId) -> RepoResult<()>;
    /// Clears `hidden_at`.
    fn restore_proposal(&self, id: ProposalId) -> RepoResult<()>;
    /// Sets `retired_at` to the given instant.
    fn retire_proposal(&self, id: ProposalId, retired_at: i64) -> RepoResult<()>;
    /// Hard-deletes the row. Notifications referencing it are not touched.
    fn destroy_proposal(&self, id: ProposalId) -> RepoResult<()>;
}

/// SQLite-backed proposal repository.
pub struct SqliteProposalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProposalRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "proposals")?;
        Ok(Self { conn })
    }

    fn update_row(&self, id: ProposalId, sql: &str, value: Option<i64>) -> RepoResult<()> {
        let changed = self.conn.execute(sql, params![value, id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

impl ProposalLookup for SqliteProposalRepository<'_> {
    fn fetch_proposal(&self, id: ProposalId) -> RepoResult<Option<Proposal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROPOSAL_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_proposal_row(row)?));
        }

        Ok(None)
    }
}

impl ProposalRepository for SqliteProposalRepository<'_> {
    fn create_proposal(&self, proposal: &Proposal) -> RepoResult<ProposalId> {
        self.conn.execute(
            "INSERT INTO proposals (uuid, title, hidden_at, retired_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                proposal.uuid.to_string(),
                proposal.title.as_str(),
                proposal.hidden_at,
                proposal.retired_at,
            ],
        )?;

        Ok(proposal.uuid)
    }

    fn hide_proposal(&self, id: ProposalId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE proposals
             SET hidden_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn restore_proposal(&self, id: ProposalId) -> RepoResult<()> {
        self.update_row(
            id,
            "UPDATE proposals SET hidden_at = ?1 WHERE uuid = ?2;",
            None,
        )
    }

    fn retire_proposal(&self, id: ProposalId, retired_at: i64) -> RepoResult<()> {
        self.update_row(
            id,
            "UPDATE proposals SET retired_at = ?1 WHERE uuid = ?2;",
            Some(retired_at),
        )
    }

    fn destroy_proposal(&self, id: ProposalId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM proposals WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_proposal_row(row: &Row<'_>) -> RepoResult<Proposal> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid_column(&uuid_text, "proposals.uuid")?;

    Ok(Proposal {
        uuid,
        title: row.get("title")?,
        hidden_at: row.get("hidden_at")?,
        retired_at: row.get("retired_at")?,
    })
}
