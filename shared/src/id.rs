//! Resource ID generation
//!
//! IDs are wall-clock millisecond timestamps, matching the ids already
//! present in stored sheet data. Successive calls in the same
//! millisecond are clamped strictly upward, so uniqueness holds within
//! a process (the only guarantee the single-client model needs).

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate the next resource ID.
pub fn next_id() -> i64 {
    let now = now_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(observed) => last = observed,
        }
    }
}
