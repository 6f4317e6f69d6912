//! Frame limiter
//!
//! One simulation tick per scheduled frame, capped at the target rate. The
//! event loop sleeps until [`FrameLimiter::deadline`], calls
//! [`FrameLimiter::poll`] to latch a due tick, and the redraw handler claims
//! it with [`FrameLimiter::take_tick`]. Redraws the OS requests on its own
//! (expose, resize) find no latched tick and only repaint.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    period: Duration,
    next: Instant,
    /// A due tick not yet claimed by a redraw
    tick_pending: bool,
}

impl FrameLimiter {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next: now,
            tick_pending: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame may start
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// True (and schedules the following frame) once the deadline has passed.
    /// A loop that fell more than a period behind is resynced to `now`
    /// instead of running a burst of catch-up frames.
    pub fn frame_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next + self.period < now {
            self.next = now + self.period;
        }
        true
    }

    /// Latch a tick if one is due; true while a tick is waiting
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.frame_due(now) {
            self.tick_pending = true;
        }
        self.tick_pending
    }

    /// Claim the latched tick, at most once per scheduled frame
    pub fn take_tick(&mut self) -> bool {
        std::mem::take(&mut self.tick_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_rate() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(60, start);
        assert!(limiter.frame_due(start));
        assert!(!limiter.frame_due(start + Duration::from_millis(5)));
        assert_eq!(limiter.deadline(), start + limiter.period());
        assert!(limiter.frame_due(start + limiter.period()));
    }

    #[test]
    fn test_steady_schedule_has_no_drift() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(50, start);
        let period = limiter.period();
        assert_eq!(period, Duration::from_millis(20));
        for i in 0..10 {
            // Wake a little late each time
            assert!(limiter.frame_due(start + period * i + Duration::from_millis(1)));
        }
        assert_eq!(limiter.deadline(), start + period * 10);
    }

    #[test]
    fn test_extra_redraws_get_no_tick() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(60, start);
        // Redraw before anything was scheduled
        assert!(!limiter.take_tick());

        assert!(limiter.poll(start));
        assert!(limiter.take_tick());
        // Resize/expose redraws inside the same frame period
        assert!(!limiter.take_tick());
        assert!(!limiter.poll(start + Duration::from_millis(3)));
        assert!(!limiter.take_tick());

        // Next period latches exactly one more
        assert!(limiter.poll(start + limiter.period()));
        assert!(limiter.poll(start + limiter.period()), "unclaimed tick stays latched");
        assert!(limiter.take_tick());
        assert!(!limiter.take_tick());
    }

    #[test]
    fn test_ticks_over_a_second_match_rate() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(60, start);
        let mut ticks = 0;
        // Poll every millisecond with a redraw burst after each poll
        for ms in 0..1000 {
            limiter.poll(start + Duration::from_millis(ms));
            for _ in 0..3 {
                if limiter.take_tick() {
                    ticks += 1;
                }
            }
        }
        assert_eq!(ticks, 60);
    }

    #[test]
    fn test_long_stall_resyncs() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(60, start);
        assert!(limiter.frame_due(start));
        let late = start + Duration::from_secs(1);
        assert!(limiter.frame_due(late));
        assert_eq!(limiter.deadline(), late + limiter.period());
        assert!(!limiter.frame_due(late + Duration::from_millis(1)));
    }
}
