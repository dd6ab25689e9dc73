//! Settings for yoda, resolved once per process from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `YODA_PROPERTY_CASES` | 100 | Randomized trials per `all()` call |
//! | `YODA_DUMP_LIMIT` | 4096 | Max characters of a diagnostic in a failure message |
//! | `YODA_DIFF` | on | Append a line diff to failed `equal()` diagnostics |
//!
//! Invalid values fall back to the default and emit a warning.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

pub const PROPERTY_CASES_VAR: &str = "YODA_PROPERTY_CASES";
pub const DUMP_LIMIT_VAR: &str = "YODA_DUMP_LIMIT";
pub const DIFF_VAR: &str = "YODA_DIFF";

pub const DEFAULT_PROPERTY_CASES: u32 = 100;
pub const DEFAULT_DUMP_LIMIT: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub property_cases: u32,
    pub dump_limit: usize,
    pub diff: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            property_cases: DEFAULT_PROPERTY_CASES,
            dump_limit: DEFAULT_DUMP_LIMIT,
            diff: true,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            property_cases: positive(&lookup, PROPERTY_CASES_VAR)
                .unwrap_or(defaults.property_cases),
            dump_limit: positive(&lookup, DUMP_LIMIT_VAR).unwrap_or(defaults.dump_limit),
            diff: lookup(DIFF_VAR).map_or(defaults.diff, |value| switch(DIFF_VAR, &value)),
        }
    }
}

/// Process-wide settings, read from the environment on first use.
pub fn settings() -> &'static Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(Settings::from_env)
}

fn positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Some(value),
        _ => {
            tracing::warn!(key, value = %raw, "Ignoring invalid setting, expected a positive integer");
            None
        }
    }
}

fn switch(key: &str, raw: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "0" | "false" | "off" | "no" => false,
        "1" | "true" | "on" | "yes" | "" => true,
        _ => {
            tracing::warn!(key, value = %raw, "Ignoring invalid switch, expected on/off");
            true
        }
    }
}
