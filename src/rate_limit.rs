use dashmap::DashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

// Outcome of a rate limit check
pub enum Decision {
    Allowed { remaining: u32, reset_in: Duration },
    Limited { retry_after: Duration },
}

// Seam for swapping in a shared-store limiter in a scaled deployment.
// This crate ships the in-memory one; the throttle is best-effort per process.
pub trait RateLimiter: Send + Sync {
    fn check(&self, client: &str, now: Instant) -> Decision;
}

// Fixed window counter - one shared window for all clients, reset lazily
pub struct FixedWindowLimiter {
    counts: DashMap<String, u32>,
    window_start: Mutex<Instant>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self::new_at(max_requests, window, Instant::now())
    }

    fn new_at(max_requests: u32, window: Duration, start: Instant) -> Self {
        Self {
            counts: DashMap::new(),
            window_start: Mutex::new(start),
            max_requests,
            window,
        }
    }
}

impl RateLimiter for FixedWindowLimiter {
    fn check(&self, client: &str, now: Instant) -> Decision {
        let mut window_start = self.window_start.lock().unwrap();

        // window expired..? clear everything and start a new one
        if now.duration_since(*window_start) > self.window {
            self.counts.clear();
            *window_start = now;
        }

        let reset_in = (*window_start + self.window).saturating_duration_since(now);

        let mut count = self.counts.entry(client.to_string()).or_insert(0);
        *count += 1;

        if *count > self.max_requests {
            Decision::Limited {
                retry_after: reset_in,
            }
        } else {
            Decision::Allowed {
                remaining: self.max_requests - *count,
                reset_in,
            }
        }
    }
}
