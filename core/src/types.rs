/// Count type used for image totals and per-round sizes.
pub type ImageCount = usize;

/// One-based round number as shown to players, `0` means no round has started.
pub type RoundNumber = u32;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Zero-based position of `round` in round-indexed storage.
pub const fn round_index(round: RoundNumber) -> Option<usize> {
    match round.checked_sub(1) {
        Some(index) => Some(index as usize),
        None => None,
    }
}

pub fn now_millis() -> Timestamp {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as Timestamp)
}
