//! Time and date calculation utilities.
//!
//! Freshness arithmetic for inventory snapshots, kept separate from the coordinator so the
//! boundary behaviour can be tested against fixed timestamps.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Whether a snapshot last updated at `updated_at` is still fresh at `now`.
///
/// Uses strict less-than: a snapshot exactly `threshold` old is stale. Snapshots timestamped in
/// the future (clock skew between database and server) are considered fresh.
pub fn is_fresh(updated_at: DateTime<Utc>, now: DateTime<Utc>, threshold: Duration) -> bool {
    let age = now.signed_duration_since(updated_at);

    match age.to_std() {
        Ok(age) => age < threshold,
        Err(_) => true,
    }
}
