use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Remote list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Scheme and host (e.g., "https://jsonplaceholder.typicode.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Resource path appended to the base URL (e.g., "posts").
    #[serde(default = "default_path")]
    pub path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Offline data source used instead of the remote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Use the mock service (default: false).
    #[serde(default)]
    pub enabled: bool,
    /// Make every fetch fail (default: false).
    #[serde(default)]
    pub should_fail: bool,
    /// Lower bound of the simulated latency (default: 3000).
    #[serde(default = "default_delay_min_ms")]
    pub delay_min_ms: u64,
    /// Upper bound of the simulated latency (default: 5000).
    #[serde(default = "default_delay_max_ms")]
    pub delay_max_ms: u64,
}

/// One-shot reachability request sent before the first load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_probe_url")]
    pub url: String,
    #[serde(default = "default_probe_timeout")]
    pub timeout_seconds: u32,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_path() -> String {
    "posts".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_delay_min_ms() -> u64 {
    3000
}

fn default_delay_max_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

fn default_probe_url() -> String {
    "https://www.google.com".to_string()
}

fn default_probe_timeout() -> u32 {
    5
}

impl ServiceConfig {
    /// Full endpoint URL, before validation.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl MockConfig {
    pub fn delay_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.delay_min_ms),
            Duration::from_millis(self.delay_max_ms),
        )
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            should_fail: false,
            delay_min_ms: default_delay_min_ms(),
            delay_max_ms: default_delay_max_ms(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_probe_url(),
            timeout_seconds: default_probe_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ServiceConfig {
            base_url: "http://localhost:8080/".to_string(),
            path: "/posts".to_string(),
            ..ServiceConfig::default()
        };
        assert_eq!(config.endpoint(), "http://localhost:8080/posts");
    }

    #[test]
    fn default_endpoint() {
        assert_eq!(
            ServiceConfig::default().endpoint(),
            "https://jsonplaceholder.typicode.com/posts"
        );
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
