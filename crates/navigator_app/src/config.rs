use std::fs;
use std::path::Path;

use client_logging::client_warn;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "navigator.ron";

/// Read-only startup configuration. Everything else the client holds is
/// memory-resident and gone when the process exits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_url: String,
    pub headless: bool,
    /// Timeout hint forwarded to the service with every request, in
    /// milliseconds.
    pub timeout_ms: u64,
    /// Mirror the log file to the terminal as well.
    pub log_to_terminal: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:8000".to_string(),
            headless: true,
            timeout_ms: 30_000,
            log_to_terminal: false,
        }
    }
}

/// Loads `navigator.ron` from `dir`, falling back to defaults when the
/// file is absent or unreadable. `NAVIGATOR_SERVICE_URL` overrides the
/// service URL either way.
pub fn load(dir: &Path) -> AppConfig {
    let mut config = read_config_file(dir);
    if let Ok(url) = std::env::var("NAVIGATOR_SERVICE_URL") {
        if !url.trim().is_empty() {
            config.service_url = url;
        }
    }
    config
}

fn read_config_file(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            client_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            client_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{load, read_config_file, AppConfig, CONFIG_FILENAME};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(read_config_file(dir.path()), AppConfig::default());
    }

    #[test]
    fn valid_file_is_parsed() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"(
    service_url: "http://navigator.internal:9000",
    headless: false,
)"#,
        )
        .expect("write config");

        let config = read_config_file(dir.path());
        assert_eq!(config.service_url, "http://navigator.internal:9000");
        assert!(!config.headless);
        // Unspecified fields keep their defaults.
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILENAME), "(((").expect("write config");

        assert_eq!(read_config_file(dir.path()), AppConfig::default());
    }

    #[test]
    fn env_var_overrides_service_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::env::set_var("NAVIGATOR_SERVICE_URL", "http://override:1234");
        let config = load(dir.path());
        std::env::remove_var("NAVIGATOR_SERVICE_URL");

        assert_eq!(config.service_url, "http://override:1234");
    }
}
