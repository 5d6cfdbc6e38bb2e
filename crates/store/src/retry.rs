//! Retry policies for the storage layer.
//!
//! Two distinct policies live here:
//!
//! - [`ConnectPolicy`] governs client construction at startup: a fixed
//!   number of attempts with a fixed pause between them. Startup is
//!   all-or-nothing; if every attempt fails the caller aborts the process.
//! - [`Backoff`] governs individual requests after startup: exponentially
//!   growing delays, starting small and capped, applied to transient
//!   transport failures.

use std::time::Duration;

use tracing::warn;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::store::ElasticsearchStore;

/// Exponential backoff schedule for request-level retries.
///
/// Yields delays that double from `initial` until the next delay would
/// exceed `cap`, then stops. The default schedule (10ms initial, 1s cap)
/// yields 10ms, 20ms, 40ms, ... 640ms.
#[derive(Debug, Clone)]
pub struct Backoff {
    next: Duration,
    cap: Duration,
}

impl Backoff {
    /// Creates a backoff schedule with the given initial delay and cap.
    pub fn new(initial: Duration, cap: Duration) -> Self {
        Self { next: initial, cap }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(Duration::from_millis(10), Duration::from_secs(1))
    }
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.next > self.cap {
            return None;
        }
        let current = self.next;
        self.next = current.saturating_mul(2);
        Some(current)
    }
}

/// Policy for establishing the Elasticsearch client at startup.
#[derive(Debug, Clone)]
pub struct ConnectPolicy {
    /// Maximum number of construction attempts.
    pub max_attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl Default for ConnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Attempts to construct an [`ElasticsearchStore`], retrying per the policy.
///
/// Each failed attempt is logged; after the final attempt the last error is
/// returned. No traffic should be served if this fails.
pub async fn connect_with_retry(
    config: StoreConfig,
    policy: ConnectPolicy,
) -> StoreResult<ElasticsearchStore> {
    let max_attempts = policy.max_attempts.max(1);

    let mut attempt = 0;
    loop {
        attempt += 1;
        match ElasticsearchStore::new(config.clone()) {
            Ok(store) => return Ok(store),
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "Failed to create Elasticsearch client"
                );
                if attempt >= max_attempts {
                    return Err(e);
                }
            }
        }

        tokio::time::sleep(policy.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_schedule() {
        let delays: Vec<u64> = Backoff::default().map(|d| d.as_millis() as u64).collect();
        assert_eq!(delays, vec![10, 20, 40, 80, 160, 320, 640]);
    }

    #[test]
    fn test_backoff_custom_cap() {
        let delays: Vec<u64> = Backoff::new(Duration::from_millis(100), Duration::from_millis(400))
            .map(|d| d.as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![100, 200, 400]);
    }

    #[test]
    fn test_connect_policy_defaults() {
        let policy = ConnectPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_with_retry_invalid_url() {
        let config = StoreConfig {
            url: "not a url".to_string(),
            ..Default::default()
        };
        let policy = ConnectPolicy {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        };

        // Paused time auto-advances through the inter-attempt pauses
        let result = connect_with_retry(config, policy).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connect_with_retry_succeeds() {
        let store = connect_with_retry(StoreConfig::default(), ConnectPolicy::default())
            .await
            .unwrap();
        assert_eq!(store.config().index, "your-index-name");
    }
}
