use std::{collections::HashMap, path::PathBuf, time::Duration};

use carelink_app::AppConfig;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;

fn load(vars: &[(&str, &str)]) -> eyre::Result<AppConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_apply_when_only_url_is_set() {
    let config = load(&[("CARELINK_API_URL", "https://api.carelink.test")]).unwrap();

    assert_eq!(config.client.base_url.as_str(), "https://api.carelink.test/");
    assert_eq!(config.client.request_timeout, Duration::from_secs(30));
    assert_eq!(config.storage_dir, PathBuf::from(".carelink"));
    assert_eq!(config.search_debounce, Duration::from_millis(500));
    assert_eq!(config.video_app_id, None);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.log_filter, None);
}

#[test]
fn test_every_setting_can_be_overridden() {
    let config = load(&[
        ("CARELINK_API_URL", "http://localhost:5000/"),
        ("CARELINK_STORAGE_DIR", "/tmp/carelink"),
        ("CARELINK_REQUEST_TIMEOUT_SECONDS", "5"),
        ("CARELINK_SEARCH_DEBOUNCE_MS", "250"),
        ("CARELINK_VIDEO_APP_ID", "1234"),
        ("LOG_LEVEL", "debug"),
        ("LOG_FILTER", "carelink=trace"),
    ])
    .unwrap();

    assert_eq!(config.client.request_timeout, Duration::from_secs(5));
    assert_eq!(config.storage_dir, PathBuf::from("/tmp/carelink"));
    assert_eq!(config.search_debounce, Duration::from_millis(250));
    assert_eq!(config.video_app_id.as_deref(), Some("1234"));
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.log_filter.as_deref(), Some("carelink=trace"));
}

#[rstest]
#[case(&[])]
#[case(&[("CARELINK_API_URL", "   ")])]
#[case(&[("CARELINK_API_URL", "localhost:5000")])]
#[case(&[("CARELINK_API_URL", "http://localhost"), ("CARELINK_REQUEST_TIMEOUT_SECONDS", "soon")])]
#[case(&[("CARELINK_API_URL", "http://localhost"), ("CARELINK_SEARCH_DEBOUNCE_MS", "-1")])]
fn test_invalid_configuration_is_an_error(#[case] vars: &[(&str, &str)]) {
    assert!(load(vars).is_err());
}

#[rstest]
#[case("trace", Level::TRACE)]
#[case("WARN", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_log_level_parsing(#[case] value: &str, #[case] expected: Level) {
    let config = load(&[("CARELINK_API_URL", "http://localhost"), ("LOG_LEVEL", value)]).unwrap();

    assert_eq!(config.log_level, expected);
}
