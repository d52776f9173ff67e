use chrono::Utc;

/// Source of "now" for reward expiry checks, in unix milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    /// Pinned to a timestamp, for reproducible fixtures.
    Fixed(i64),
}

impl Clock {
    pub fn now_ms(&self) -> i64 {
        match self {
            Clock::System => now_ms(),
            Clock::Fixed(ms) => *ms,
        }
    }
}

/// Current wall-clock time in unix milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
