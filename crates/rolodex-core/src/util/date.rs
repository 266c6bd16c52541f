use chrono::{DateTime, Utc};

pub type DateTimeUtc = DateTime<Utc>;

pub fn now() -> DateTimeUtc {
    Utc::now()
}

/// Current unix timestamp in seconds.
pub fn timestamp() -> u64 {
    now().timestamp() as u64
}
