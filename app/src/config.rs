//! Configuration management for the taskdeck application.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Loading goes through a lookup function so tests never touch the
//! process environment.

use serde::{Deserialize, Serialize};
use std::env;

/// Default title of the task seeded at startup
const DEFAULT_SEED_TITLE: &str = "Learn React Native";

/// Default event-poll tick for the terminal UI, in milliseconds
const DEFAULT_TICK_MS: u64 = 250;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Title of the task seeded at startup; `None` starts with an
    /// empty list
    pub seed_title: Option<String>,
    /// Event-poll tick for the terminal UI, in milliseconds
    pub tick_ms: u64,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// - `TASKDECK_SEED_TITLE`: seed task title; set empty to start
    ///   with no tasks (default: "Learn React Native")
    /// - `TASKDECK_TICK_MS`: UI poll tick in milliseconds; values that
    ///   fail to parse fall back to the default (default: 250)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through the given variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_title = match lookup("TASKDECK_SEED_TITLE") {
            Some(title) if title.is_empty() => None,
            Some(title) => Some(title),
            None => Some(DEFAULT_SEED_TITLE.to_string()),
        };

        let tick_ms = lookup("TASKDECK_TICK_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TICK_MS);

        Self {
            seed_title,
            tick_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.seed_title.as_deref(), Some("Learn React Native"));
        assert_eq!(config.tick_ms, 250);
    }

    #[test]
    fn default_impl_matches_an_empty_environment() {
        assert_eq!(Config::default(), Config::from_lookup(|_| None));
    }

    #[test]
    fn seed_title_override() {
        let config = Config::from_lookup(|key| {
            (key == "TASKDECK_SEED_TITLE").then(|| "Buy milk".to_string())
        });

        assert_eq!(config.seed_title.as_deref(), Some("Buy milk"));
    }

    #[test]
    fn empty_seed_title_disables_the_seed() {
        let config = Config::from_lookup(|key| {
            (key == "TASKDECK_SEED_TITLE").then(String::new)
        });

        assert_eq!(config.seed_title, None);
    }

    #[test]
    fn tick_override_and_fallback() {
        let overridden = Config::from_lookup(|key| {
            (key == "TASKDECK_TICK_MS").then(|| "100".to_string())
        });
        assert_eq!(overridden.tick_ms, 100);

        let invalid = Config::from_lookup(|key| {
            (key == "TASKDECK_TICK_MS").then(|| "soon".to_string())
        });
        assert_eq!(invalid.tick_ms, 250);
    }
}
