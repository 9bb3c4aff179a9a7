//! Domain model for proposal notifications.
//!
//! # Responsibility
//! - Define the canonical notification and proposal-snapshot shapes used by
//!   core decision logic.
//! - Keep time representation uniform (Unix epoch milliseconds).
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - A notification's `created_at` is set once and never mutated.
//! - Proposal removal is represented by hidden timestamps (soft) or a missing
//!   row (hard), never by flags on the notification itself.

pub mod notification;
pub mod proposal;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix epoch milliseconds.
pub fn epoch_ms_now() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        // Pre-epoch clocks cannot occur on supported platforms.
        Err(_) => 0,
    }
}
