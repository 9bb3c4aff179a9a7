//! Runtime settings store with a typed minimum-interval accessor.
//!
//! # Responsibility
//! - Persist runtime-mutable configuration as key/value rows.
//! - Expose the notification minimum interval as a typed value.
//!
//! # Invariants
//! - An unset minimum interval means no throttling (0 days).
//! - Core decision functions receive the interval explicitly; this store is
//!   only read at the host boundary, never from ambient global state.

use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Settings key for the minimum interval between notifications per proposal.
pub const MINIMUM_INTERVAL_KEY: &str = "proposals.notification_minimum_interval_in_days";

/// Repository interface for runtime-mutable settings.
pub trait SettingsRepository {
    /// Returns the raw value for `key`, if set.
    fn get_setting(&self, key: &str) -> RepoResult<Option<String>>;
    /// Inserts or replaces the value for `key`.
    fn set_setting(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Minimum interval in days between notifications for one proposal.
    /// Defaults to 0 (no throttling) when unset.
    fn minimum_interval_days(&self) -> RepoResult<u32> {
        match self.get_setting(MINIMUM_INTERVAL_KEY)? {
            None => Ok(0),
            Some(raw) => raw.parse::<u32>().map_err(|_| {
                RepoError::InvalidData(format!(
                    "invalid value `{raw}` for setting {MINIMUM_INTERVAL_KEY}"
                ))
            }),
        }
    }

    /// Updates the minimum interval setting.
    fn set_minimum_interval_days(&self, days: u32) -> RepoResult<()> {
        self.set_setting(MINIMUM_INTERVAL_KEY, &days.to_string())
    }
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "settings")?;
        Ok(Self { conn })
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn get_setting(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM settings WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_setting(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
