use chrono::{DateTime, Utc};

pub type ServerTime = DateTime<Utc>;

/// Converts a unix timestamp from Steam into a [`ServerTime`]. Returns `None` if the timestamp
/// is out of range.
pub fn timestamp_to_server_time(timestamp: u64) -> Option<ServerTime> {
    let timestamp = i64::try_from(timestamp).ok()?;

    DateTime::from_timestamp(timestamp, 0)
}
