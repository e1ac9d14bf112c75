//! Display configuration resolved once from the environment at startup

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_APP_TITLE};
use std::env;
use tracing::debug;

pub const APP_TITLE_VAR: &str = "VITE_APP_TITLE";
pub const API_BASE_URL_VAR: &str = "VITE_API_BASE_URL";

/// The two display strings shown on the landing page. Read once, never
/// mutated for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_title: String,
    pub api_base_url: String,
}

impl Config {
    /// Resolve both values from the environment, falling back to the
    /// hardcoded defaults. An empty value counts as unset.
    pub fn from_env() -> Self {
        Self {
            app_title: env_or(APP_TITLE_VAR, DEFAULT_APP_TITLE),
            api_base_url: env_or(API_BASE_URL_VAR, DEFAULT_API_BASE_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => {
            debug!(key, default, "Environment variable unset, using default");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_vars() {
        env::remove_var(APP_TITLE_VAR);
        env::remove_var(API_BASE_URL_VAR);
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        clear_vars();
        let config = Config::from_env();
        assert_eq!(config.app_title, "AI-Based Timetable Automation");
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        clear_vars();
        env::set_var(APP_TITLE_VAR, "Demo");
        let config = Config::from_env();
        assert_eq!(config.app_title, "Demo");
        assert_eq!(config.api_base_url, "http://localhost:8000");
        clear_vars();
    }

    #[test]
    #[serial]
    fn empty_value_falls_back_to_default() {
        clear_vars();
        env::set_var(APP_TITLE_VAR, "");
        env::set_var(API_BASE_URL_VAR, "");
        let config = Config::from_env();
        assert_eq!(config.app_title, "AI-Based Timetable Automation");
        assert_eq!(config.api_base_url, "http://localhost:8000");
        clear_vars();
    }

    #[test]
    #[serial]
    fn resolution_is_stable() {
        clear_vars();
        env::set_var(APP_TITLE_VAR, "Demo");
        env::set_var(API_BASE_URL_VAR, "https://api.example.test");
        assert_eq!(Config::from_env(), Config::from_env());
        clear_vars();
    }
}
