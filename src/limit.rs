// Moving-window rate limiter — one shared instance gates every remote call.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::error::{Result, SyncError};

/// A limit of `permits` calls per continuously sliding `window`.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub permits: usize,
    pub window: Duration,
}

impl RateLimit {
    pub fn per_second(permits: usize) -> Self {
        Self {
            permits,
            window: Duration::from_secs(1),
        }
    }
}

pub struct RateLimiter {
    limit: RateLimit,
    hits: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(limit: RateLimit) -> Self {
        Self {
            limit,
            hits: Mutex::new(VecDeque::with_capacity(limit.permits)),
        }
    }

    /// Wait until a call slot is free, then record the hit.
    ///
    /// Re-checks the window after every sleep instead of assuming the slot is
    /// still free; concurrent acquirers may have claimed it in the meantime.
    pub async fn acquire(&self) {
        loop {
            match self.hit() {
                Ok(()) => return,
                Err(wait) => tokio::time::sleep(wait).await,
            }
        }
    }

    /// Record a hit if a slot is free, otherwise fail immediately.
    pub fn try_acquire(&self) -> Result<()> {
        self.hit().map_err(|wait| {
            SyncError::RateLimitExceeded(format!(
                "{} calls per {:?}, next slot in {:?}",
                self.limit.permits, self.limit.window, wait
            ))
        })
    }

    /// Atomic hit-check-and-record. On a full window returns the time until the
    /// oldest hit slides out.
    fn hit(&self) -> std::result::Result<(), Duration> {
        let now = Instant::now();
        let mut hits = self.hits.lock();

        while let Some(front) = hits.front() {
            if now.duration_since(*front) >= self.limit.window {
                hits.pop_front();
            } else {
                break;
            }
        }

        if hits.len() < self.limit.permits {
            hits.push_back(now);
            Ok(())
        } else {
            // Window is full; the front hit is the oldest one still inside it.
            let oldest = *hits.front().unwrap_or(&now);
            Err(self.limit.window - now.duration_since(oldest))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_strict_mode_fails_when_window_full() {
        let limiter = RateLimiter::new(RateLimit::per_second(3));
        for _ in 0..3 {
            limiter.try_acquire().unwrap();
        }
        assert!(matches!(
            limiter.try_acquire(),
            Err(SyncError::RateLimitExceeded(_))
        ));
    }

    #[tokio::test]
    async fn test_acquire_within_limit_does_not_wait() {
        let limiter = RateLimiter::new(RateLimit::per_second(2));
        let before = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(before.elapsed() < Duration::from_millis(100));
    }
}
