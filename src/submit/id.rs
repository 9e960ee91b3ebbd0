//! Agent id assignment

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Source of fresh agent ids
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamps, bumped so ids from this process strictly increase.
///
/// Two sessions submitting in the same millisecond can still collide.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match LAST_ISSUED.compare_exchange_weak(last, candidate, Ordering::SeqCst, Ordering::Relaxed) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => last = actual,
            }
        }
    }
}
