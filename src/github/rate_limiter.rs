use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use reqwest::Response;
use tokio::time::sleep;

/// Tracks the GitHub rate-limit headers between sequential requests and
/// sleeps until the reset when the quota is exhausted.
pub struct RateLimiter {
    remaining: u32,
    reset_at: Option<Instant>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            remaining: u32::MAX,
            reset_at: None,
        }
    }

    pub async fn wait(&mut self) {
        if self.remaining > 0 {
            return;
        }
        if let Some(reset_at) = self.reset_at {
            let now = Instant::now();
            if reset_at > now {
                let wait_duration = reset_at - now;
                tracing::info!("Rate limited, waiting {:?}", wait_duration);
                sleep(wait_duration).await;
            }
        }
        self.remaining = 1;
        self.reset_at = None;
    }

    pub fn observe(&mut self, response: &Response) {
        let headers = response.headers();

        if let Some(remaining) = headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
        {
            self.remaining = remaining;
        }

        if let Some(reset) = headers
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            if reset > now {
                self.reset_at = Some(Instant::now() + Duration::from_secs(reset - now));
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
