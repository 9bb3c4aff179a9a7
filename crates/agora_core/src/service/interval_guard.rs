//! Interval-throttling decision for notification creation.
//!
//! # Responsibility
//! - Decide whether a new notification for a proposal is admissible now,
//!   given the creation instant of the most recent prior notification.
//!
//! # Invariants
//! - Pure: no side effects, no storage access, always returns a boolean.
//! - Only the most recent prior notification matters, never full history.
//! - The boundary is inclusive: elapsed time exactly equal to the minimum
//!   interval admits.

/// Milliseconds per day, the unit the interval setting is expressed in.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Returns whether a notification proposed at `proposed_created_at` may be
/// created, given the most recent prior notification for the same proposal.
///
/// # Contract
/// - `last_created_at = None` (no prior notification) always admits.
/// - `minimum_interval_days = 0` always admits.
/// - Otherwise admits iff at least `minimum_interval_days` full days have
///   elapsed since the prior notification.
pub fn may_create(
    proposed_created_at: i64,
    last_created_at: Option<i64>,
    minimum_interval_days: u32,
) -> bool {
    if minimum_interval_days == 0 {
        return true;
    }

    match last_created_at {
        None => true,
        Some(last) => {
            proposed_created_at - last >= i64::from(minimum_interval_days) * MS_PER_DAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{may_create, MS_PER_DAY};

    #[test]
    fn no_prior_notification_admits_for_any_interval() {
        assert!(may_create(0, None, 0));
        assert!(may_create(0, None, 3));
        assert!(may_create(0, None, u32::MAX));
    }

    #[test]
    fn zero_interval_always_admits() {
        assert!(may_create(100, Some(100), 0));
        assert!(may_create(0, Some(MS_PER_DAY), 0));
    }

    #[test]
    fn below_minimum_interval_rejects() {
        let last = 1_700_000_000_000;
        assert!(!may_create(last + 1, Some(last), 3));
        assert!(!may_create(last + 3 * MS_PER_DAY - 1, Some(last), 3));
    }

    #[test]
    fn above_minimum_interval_admits() {
        let last = 1_700_000_000_000;
        assert!(may_create(last + 4 * MS_PER_DAY, Some(last), 3));
    }

    #[test]
    fn exact_boundary_is_inclusive() {
        let last = 1_700_000_000_000;
        assert!(may_create(last + 3 * MS_PER_DAY, Some(last), 3));
    }
}
