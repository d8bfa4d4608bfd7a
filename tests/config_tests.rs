use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;
use syme_watch::config::{self, Config};

// Environment variables are process-global; serialize the tests that touch them.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const VARS: [&str; 5] = [
    "SYME_BASE_URL",
    "SYME_POLL_INTERVAL_MS",
    "SYME_REQUEST_TIMEOUT_MS",
    "SYME_HALT_HIDDEN_STATES",
    "SYME_STRUCK_STATES",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(config::sanitize_base_url("https://syme.example/"), "https://syme.example");
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(config::sanitize_base_url("https://syme.example///"), "https://syme.example");
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(config::sanitize_base_url("  https://syme.example/  "), "https://syme.example");
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_BASE_URL);
}

#[test]
fn test_defaults_without_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let cfg = Config::from_env();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.poll_interval, Duration::from_millis(4000));
    assert_eq!(cfg.request_timeout, None);
}

#[test]
fn test_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("SYME_BASE_URL", "https://syme.example/");
    env::set_var("SYME_POLL_INTERVAL_MS", "2000");
    env::set_var("SYME_REQUEST_TIMEOUT_MS", "1500");
    env::set_var("SYME_STRUCK_STATES", "failed");

    let cfg = Config::from_env();
    clear_env();

    assert_eq!(cfg.base_url, "https://syme.example");
    assert_eq!(cfg.poll_interval, Duration::from_millis(2000));
    assert_eq!(cfg.request_timeout, Some(Duration::from_millis(1500)));
    assert_eq!(cfg.decoration.strike_address_on, vec!["failed".to_string()]);
    assert_eq!(cfg.decoration.hide_halt_on, vec!["halted".to_string(), "halting".to_string()]);
}

#[test]
fn test_invalid_interval_falls_back_to_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("SYME_POLL_INTERVAL_MS", "soon");

    let interval = config::get_poll_interval();
    clear_env();

    assert_eq!(interval, Duration::from_millis(config::DEFAULT_POLL_INTERVAL_MS));
}

#[test]
fn test_env_file_is_loaded() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "SYME_BASE_URL=http://10.0.0.9:8000/").unwrap();
    writeln!(file, "SYME_POLL_INTERVAL_MS=2000").unwrap();
    config::load_env_file(file.path().to_str());

    let cfg = Config::from_env();
    clear_env();

    assert_eq!(cfg.base_url, "http://10.0.0.9:8000");
    assert_eq!(cfg.poll_interval, Duration::from_millis(2000));
}
