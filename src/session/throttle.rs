//! Wall-clock throttling of redraw requests.

use std::time::{Duration, Instant};

/// Default minimum gap between non-final redraw requests.
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(20);

/// Gate that drops redraw requests arriving faster than the configured
/// interval. Requests are dropped, not queued: a skipped frame is repainted
/// by whichever later request makes it through (final gesture events bypass
/// the gate entirely via [`stamp`](Self::stamp)).
#[derive(Debug)]
pub struct RedrawThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl RedrawThrottle {
    /// Creates a throttle with the given minimum interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// The configured minimum interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` when enough time has passed since the last issued
    /// redraw, recording `now` as the new issue time. Returns `false` (and
    /// records nothing) when the request should be dropped.
    pub fn ready(&mut self, now: Instant) -> bool {
        let allow = match self.last {
            Some(last) => now.duration_since(last) > self.interval,
            None => true,
        };
        if allow {
            self.last = Some(now);
        }
        allow
    }

    /// Records an unconditional redraw at `now`, restarting the interval.
    pub fn stamp(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

impl Default for RedrawThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_REDRAW_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_passes() {
        let mut throttle = RedrawThrottle::default();
        assert!(throttle.ready(Instant::now()));
    }

    #[test]
    fn requests_inside_interval_are_dropped() {
        let mut throttle = RedrawThrottle::new(Duration::from_millis(20));
        let t0 = Instant::now();
        assert!(throttle.ready(t0));
        assert!(!throttle.ready(t0 + Duration::from_millis(5)));
        assert!(!throttle.ready(t0 + Duration::from_millis(19)));
        assert!(throttle.ready(t0 + Duration::from_millis(25)));
    }

    #[test]
    fn dropped_requests_do_not_extend_the_window() {
        let mut throttle = RedrawThrottle::new(Duration::from_millis(20));
        let t0 = Instant::now();
        assert!(throttle.ready(t0));
        assert!(!throttle.ready(t0 + Duration::from_millis(15)));
        // window still measured from t0, not from the dropped request
        assert!(throttle.ready(t0 + Duration::from_millis(21)));
    }

    #[test]
    fn stamp_restarts_the_window() {
        let mut throttle = RedrawThrottle::new(Duration::from_millis(20));
        let t0 = Instant::now();
        throttle.stamp(t0);
        assert!(!throttle.ready(t0 + Duration::from_millis(10)));
        assert!(throttle.ready(t0 + Duration::from_millis(30)));
    }
}
