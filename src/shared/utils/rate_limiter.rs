use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{direct::NotKeyed, InMemoryState},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::num::NonZeroU32;
use std::time::Duration;

type DirectRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Request rate limiter for outbound API calls
pub struct RateLimiter {
    limiter: DirectRateLimiter,
}

impl RateLimiter {
    /// Create a rate limiter with specified requests per second and burst capacity
    pub fn new(requests_per_second: f64, burst_size: u32) -> Self {
        // Convert rate to duration between requests
        let period = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX // Effectively disable if rate is 0
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(period).unwrap().allow_burst(burst);

        Self {
            limiter: GovernorRateLimiter::direct(quota),
        }
    }

    /// Wait until the next request is allowed
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_allows_initial_burst() {
        let limiter = RateLimiter::new(1.0, 2);
        assert!(limiter.can_make_request_now());
    }

    #[tokio::test]
    async fn wait_does_not_block_within_burst() {
        let limiter = RateLimiter::new(100.0, 3);
        limiter.wait().await;
        limiter.wait().await;
    }
}
