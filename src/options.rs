use std::time::Duration;

/// Configures attempt budget, backoff schedule and per-attempt timeout.
///
/// The delay before attempt `n` (`n >= 2`) is
/// `base_delay × backoff_multiplier^(n - 2)`, so the defaults produce
/// 100 ms, 200 ms, 400 ms, ...
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts including the first one. Values below 1 act as 1.
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub base_delay: Duration,
    /// Growth factor applied per additional failure.
    pub backoff_multiplier: u32,
    /// Wall-clock bound for a single attempt; `None` waits indefinitely.
    pub per_attempt_timeout: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            backoff_multiplier: 2,
            per_attempt_timeout: Some(Duration::from_millis(2_000)),
        }
    }
}

impl RetryPolicy {
    /// Sets the total attempt budget, clamped to at least 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the delay after the first failed attempt.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Sets the per-failure growth factor of the delay.
    pub fn with_backoff_multiplier(mut self, multiplier: u32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Bounds each attempt by `timeout`.
    pub fn with_per_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.per_attempt_timeout = Some(timeout);
        self
    }

    /// Lets each attempt run until the transport settles.
    pub fn without_timeout(mut self) -> Self {
        self.per_attempt_timeout = None;
        self
    }

    /// Effective attempt budget (never below 1).
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay to wait after `failed_attempt` (1-based) failed.
    ///
    /// Saturates at [`Duration::MAX`] instead of overflowing.
    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        let exp = failed_attempt.saturating_sub(1);
        let factor = self.backoff_multiplier.saturating_pow(exp);
        self.base_delay.saturating_mul(factor)
    }
}
