//! Board configuration resolved from the process environment.
//!
//! # Responsibility
//! - Provide form rule defaults and logging settings for hosts.
//! - Resolve overrides from `TASKBOARD_*` environment variables.
//!
//! # Invariants
//! - Resolution never fails: blank or malformed values fall back to
//!   defaults and are reported at `warn`.

use crate::logging::{default_log_level, parse_level};
use log::warn;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";
pub const ENV_MIN_TITLE_LEN: &str = "TASKBOARD_MIN_TITLE_LEN";
pub const ENV_MIN_DESCRIPTION_LEN: &str = "TASKBOARD_MIN_DESCRIPTION_LEN";
pub const ENV_MIN_PEOPLE: &str = "TASKBOARD_MIN_PEOPLE";

const DEFAULT_MIN_TEXT_LEN: usize = 5;
const DEFAULT_MIN_PEOPLE: u32 = 5;

/// Constraints applied to the project form before a project is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRules {
    pub min_title_len: usize,
    pub min_description_len: usize,
    pub min_people: u32,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            min_title_len: DEFAULT_MIN_TEXT_LEN,
            min_description_len: DEFAULT_MIN_TEXT_LEN,
            min_people: DEFAULT_MIN_PEOPLE,
        }
    }
}

/// Host-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub rules: InputRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            rules: InputRules::default(),
        }
    }
}

impl BoardConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, keyed by `TASKBOARD_*` names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            log_level: resolve_log_level(read(ENV_LOG_LEVEL), defaults.log_level),
            log_dir: resolve_log_dir(read(ENV_LOG_DIR)),
            rules: InputRules {
                min_title_len: parse_or(
                    ENV_MIN_TITLE_LEN,
                    read(ENV_MIN_TITLE_LEN),
                    defaults.rules.min_title_len,
                ),
                min_description_len: parse_or(
                    ENV_MIN_DESCRIPTION_LEN,
                    read(ENV_MIN_DESCRIPTION_LEN),
                    defaults.rules.min_description_len,
                ),
                min_people: parse_or(
                    ENV_MIN_PEOPLE,
                    read(ENV_MIN_PEOPLE),
                    defaults.rules.min_people,
                ),
            },
        }
    }
}

fn resolve_log_level(raw: Option<String>, fallback: String) -> String {
    let Some(raw) = raw else {
        return fallback;
    };
    match parse_level(&raw) {
        Ok(level) => level.to_string(),
        Err(_) => {
            warn!(
                "event=config_fallback module=config key={ENV_LOG_LEVEL} value={raw} fallback={fallback}"
            );
            fallback
        }
    }
}

/// Relative directories are dropped; file logging needs an absolute path.
fn resolve_log_dir(raw: Option<String>) -> Option<PathBuf> {
    let dir = PathBuf::from(raw?);
    if dir.is_absolute() {
        return Some(dir);
    }
    warn!(
        "event=config_fallback module=config key={ENV_LOG_DIR} value={} fallback=none",
        dir.display()
    );
    None
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    fallback: T,
) -> T {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!("event=config_fallback module=config key={key} value={raw} fallback={fallback}");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BoardConfig, InputRules, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_MIN_PEOPLE, ENV_MIN_TITLE_LEN,
    };
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = BoardConfig::from_lookup(|_| None);
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.rules, InputRules::default());
    }

    #[test]
    fn overrides_apply_and_malformed_values_fall_back() {
        let config = BoardConfig::from_lookup(lookup_from(&[
            (ENV_MIN_TITLE_LEN, "3"),
            (ENV_MIN_PEOPLE, "lots"),
            (ENV_LOG_DIR, " /var/log/taskboard "),
        ]));
        assert_eq!(config.rules.min_title_len, 3);
        assert_eq!(config.rules.min_people, 5);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/taskboard")));

        let config = BoardConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, "verbose"),
            (ENV_LOG_DIR, "logs"),
        ]));
        assert_eq!(config.log_level, BoardConfig::default().log_level);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn log_level_override_is_normalized() {
        let config = BoardConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, " Warning ")]));
        assert_eq!(config.log_level, "warn");
    }
}
