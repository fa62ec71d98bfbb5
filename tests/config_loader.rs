use listfeed::config::{Config, ConfigError, MockConfig, ProbeConfig, ServiceConfig};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.service.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(config.service.path, "posts");
    assert_eq!(config.service.timeout_seconds, 30);
    assert_eq!(config.service.connect_timeout_seconds, 5);

    assert!(!config.mock.enabled);
    assert!(!config.mock.should_fail);
    assert_eq!(config.mock.delay_min_ms, 3000);
    assert_eq!(config.mock.delay_max_ms, 5000);

    assert!(config.probe.enabled);
    assert_eq!(config.probe.url, "https://www.google.com");
    assert_eq!(config.probe.timeout_seconds, 5);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("listfeed/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[service]
base_url = "http://127.0.0.1:9000"

[mock]
enabled = true
delay_min_ms = 10
delay_max_ms = 20
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.service.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.service.path, "posts");
    assert_eq!(config.service.timeout_seconds, 30);
    assert!(config.mock.enabled);
    assert!(!config.mock.should_fail);
    assert_eq!(config.mock.delay_min_ms, 10);
    assert_eq!(config.mock.delay_max_ms, 20);
    assert_eq!(config.probe, ProbeConfig::default());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[service\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[service]\ntimeout_seconds = \"soon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_unreadable_path_is_read_error() {
    // A directory exists but cannot be read as a file
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_validation_rejects_bad_base_url() {
    let config = Config {
        service: ServiceConfig {
            base_url: "not a url".to_string(),
            ..ServiceConfig::default()
        },
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("service.base_url"));
}

#[test]
fn test_validation_rejects_non_http_scheme() {
    let config = Config {
        service: ServiceConfig {
            base_url: "ftp://example.com".to_string(),
            ..ServiceConfig::default()
        },
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("http or https"));
}

#[test]
fn test_validation_rejects_empty_path() {
    let config = Config {
        service: ServiceConfig {
            path: "/".to_string(),
            ..ServiceConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let config = Config {
        service: ServiceConfig {
            timeout_seconds: 0,
            ..ServiceConfig::default()
        },
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_inverted_delay_range() {
    let config = Config {
        mock: MockConfig {
            delay_min_ms: 500,
            delay_max_ms: 100,
            ..MockConfig::default()
        },
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("delay_min_ms"));
}

#[test]
fn test_disabled_probe_skips_url_check() {
    let config = Config {
        probe: ProbeConfig {
            enabled: false,
            url: "::".to_string(),
            ..ProbeConfig::default()
        },
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_file_contents_fail_validation_on_load() {
    let (_dir, path) = write_config("[mock]\ndelay_min_ms = 9\ndelay_max_ms = 1\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
