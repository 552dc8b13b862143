//! Request pacing for the TMDB API.

use std::time::Duration;

use tokio::time::Instant;

/// Default spacing between requests (~40 req/s).
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Paces outgoing TMDB requests.
///
/// TMDB throttles clients at roughly 40 requests per second; keeping a
/// minimum spacing between consecutive requests stays under that limit
/// without tracking a sliding window.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbRateLimiter {
    /// Minimum spacing between requests.
    min_interval: Duration,
    /// Earliest instant the next request may be sent.
    next_allowed: Option<Instant>,
}

impl TmdbRateLimiter {
    /// Creates a limiter with the given minimum spacing.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_allowed: None,
        }
    }

    /// Creates a limiter with the default spacing (25ms).
    pub(crate) const fn default_interval() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// Sleeps until the next request is allowed, then reserves the slot.
    pub async fn wait(&mut self) {
        if let Some(deadline) = self.next_allowed {
            tokio::time::sleep_until(deadline).await;
        }

        // checked_add only fails on clock overflow; no spacing then.
        self.next_allowed = Instant::now().checked_add(self.min_interval);
    }
}
