use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::config::MockConfig;
use crate::entity::ListItem;

use super::{ListService, ServiceError};

const DEFAULT_DELAY_MIN: Duration = Duration::from_secs(3);
const DEFAULT_DELAY_MAX: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Latency {
    None,
    Fixed(Duration),
    Between(Duration, Duration),
}

/// Deterministic stand-in for the remote endpoint.
///
/// Sleeps for the configured latency, then either fails with a simulated
/// network error or returns [`MockListService::fixture`].
#[derive(Debug, Clone)]
pub struct MockListService {
    should_fail: bool,
    latency: Latency,
}

impl MockListService {
    pub fn new() -> Self {
        Self {
            should_fail: false,
            latency: Latency::Between(DEFAULT_DELAY_MIN, DEFAULT_DELAY_MAX),
        }
    }

    pub fn from_config(config: &MockConfig) -> Self {
        let (min, max) = config.delay_range();
        Self::new()
            .failing(config.should_fail)
            .with_delay_range(min, max)
    }

    pub fn failing(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.latency = Latency::Fixed(delay);
        self
    }

    /// Uniformly random latency in `min..=max`. Bounds are swapped if given
    /// in the wrong order.
    pub fn with_delay_range(mut self, min: Duration, max: Duration) -> Self {
        self.latency = if min <= max {
            Latency::Between(min, max)
        } else {
            Latency::Between(max, min)
        };
        self
    }

    pub fn without_delay(mut self) -> Self {
        self.latency = Latency::None;
        self
    }

    fn next_delay(&self) -> Option<Duration> {
        match self.latency {
            Latency::None => None,
            Latency::Fixed(delay) => Some(delay),
            Latency::Between(min, max) if min == max => Some(min),
            Latency::Between(min, max) => Some(rand::thread_rng().gen_range(min..=max)),
        }
    }

    /// The five items returned on success.
    pub fn fixture() -> Vec<ListItem> {
        vec![
            ListItem::new(
                1,
                1,
                "Mock Item One",
                "This is the detailed content for the first mock item. It contains some sample text to demonstrate how the content will be displayed in the detail view.",
            ),
            ListItem::new(
                2,
                2,
                "Mock Item Two",
                "This is the detailed content for the second mock item. Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
            ),
            ListItem::new(
                3,
                3,
                "Mock Item Three",
                "This is the detailed content for the third mock item. It has even more text to show how scrolling works in the detail view with longer content that spans multiple lines.",
            ),
            ListItem::new(
                4,
                4,
                "Mock Item Four",
                "This is the detailed content for the fourth mock item. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
            ),
            ListItem::new(
                5,
                5,
                "Mock Item Five",
                "This is the detailed content for the fifth mock item. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
            ),
        ]
    }
}

impl Default for MockListService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListService for MockListService {
    async fn fetch_items(&self) -> Result<Vec<ListItem>, ServiceError> {
        if let Some(delay) = self.next_delay() {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail {
            return Err(ServiceError::network("Simulated network failure"));
        }

        Ok(Self::fixture())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_five_distinct_items() {
        let items = MockListService::fixture();
        assert_eq!(items.len(), 5);
        let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn delay_range_is_inclusive_and_ordered() {
        let service = MockListService::new()
            .with_delay_range(Duration::from_millis(20), Duration::from_millis(10));
        for _ in 0..50 {
            let delay = service.next_delay().unwrap();
            assert!(delay >= Duration::from_millis(10) && delay <= Duration::from_millis(20));
        }
    }

    #[test]
    fn from_config_uses_configured_range() {
        let config = MockConfig {
            enabled: true,
            should_fail: true,
            delay_min_ms: 7,
            delay_max_ms: 7,
        };
        let service = MockListService::from_config(&config);
        assert!(service.should_fail);
        assert_eq!(service.next_delay(), Some(Duration::from_millis(7)));
    }

    #[tokio::test]
    async fn returns_fixture_without_delay() {
        let items = MockListService::new().without_delay().fetch_items().await.unwrap();
        assert_eq!(items, MockListService::fixture());
    }

    #[tokio::test(start_paused = true)]
    async fn failing_service_waits_then_errors() {
        let service = MockListService::new()
            .failing(true)
            .with_delay(Duration::from_secs(4));
        let started = tokio::time::Instant::now();

        let err = service.fetch_items().await.unwrap_err();

        assert!(started.elapsed() >= Duration::from_secs(4));
        assert_eq!(err.to_string(), "Network error: Simulated network failure");
    }
}
