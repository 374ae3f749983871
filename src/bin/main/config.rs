use core::{fmt, ops::RangeInclusive};
use std::env::{self, VarError};

use log::warn;

const SCALE_KEY: &str = "DSFOLIO_SCALE";
const FRAME_MS_KEY: &str = "DSFOLIO_FRAME_MS";
const SCRIPT_KEY: &str = "DSFOLIO_SCRIPT";
const SCALE_RANGE: RangeInclusive<u64> = 1..=6;
const FRAME_MS_RANGE: RangeInclusive<u64> = 5..=100;
const DEFAULT_SCALE: u32 = 3;
const DEFAULT_FRAME_MS: u64 = 16;

/// Host-only settings read from the environment at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct HostConfig {
    /// Window pixels per surface pixel.
    pub scale: u32,
    /// Animation frame interval.
    pub frame_ms: u64,
    /// Comma-separated button labels pressed right after startup.
    pub script: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            frame_ms: DEFAULT_FRAME_MS,
            script: None,
        }
    }
}

impl HostConfig {
    /// Reads every setting, falling back to its default on bad input.
    pub(super) fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            scale: read_setting(SCALE_KEY, SCALE_RANGE, defaults.scale as u64) as u32,
            frame_ms: read_setting(FRAME_MS_KEY, FRAME_MS_RANGE, defaults.frame_ms),
            script: read_script(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum ConfigError {
    NotUnicode {
        key: &'static str,
    },
    NotANumber {
        key: &'static str,
    },
    OutOfRange {
        key: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotUnicode { key } => write!(f, "{key} is not valid unicode"),
            Self::NotANumber { key } => write!(f, "{key} is not a whole number"),
            Self::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(f, "{key}={value} is outside {min}..={max}"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_setting(
    key: &'static str,
    raw: &str,
    range: RangeInclusive<u64>,
) -> Result<u64, ConfigError> {
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::NotANumber { key })?;

    if !range.contains(&value) {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }

    Ok(value)
}

fn read_setting(key: &'static str, range: RangeInclusive<u64>, default: u64) -> u64 {
    let parsed = match env::var(key) {
        Ok(raw) => parse_setting(key, &raw, range),
        Err(VarError::NotPresent) => return default,
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key }),
    };

    parsed.unwrap_or_else(|err| {
        warn!("config: {}, using default {}", err, default);
        default
    })
}

fn read_script() -> Option<String> {
    match env::var(SCRIPT_KEY) {
        Ok(script) if !script.trim().is_empty() => Some(script),
        Ok(_) | Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            warn!("config: {}, ignoring", ConfigError::NotUnicode { key: SCRIPT_KEY });
            None
        }
    }
}
