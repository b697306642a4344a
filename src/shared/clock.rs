//! Timestamp-derived identifiers
//!
//! Records created from forms are keyed by their creation time in
//! milliseconds. Two records created within the same millisecond still get
//! distinct ids: the generator never hands out a value twice per process.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next unique millisecond timestamp, strictly greater than any previous one.
pub fn next_timestamp_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::SeqCst);
    loop {
        let candidate = if now > last { now } else { last + 1 };
        match LAST_ID.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Id for a new OLT or ONU record.
pub fn timestamp_id() -> String {
    next_timestamp_millis().to_string()
}

/// Id for a new user record (`user-<millis>`).
pub fn user_id() -> String {
    format!("user-{}", next_timestamp_millis())
}
