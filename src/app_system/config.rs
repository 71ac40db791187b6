use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use chrono::NaiveTime;
use thiserror::Error;
use tracing::{debug, info};

use crate::reservation::OrderingWindow;
use crate::store::RetryPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("Failed to read menu file {}: {source}", .path.display())]
    MenuRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed menu file {}: {source}", .path.display())]
    MenuParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Runtime settings, read from `CANTEEN_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct CanteenConfig {
    pub retry: RetryPolicy,
    /// Request queue length of the store actor.
    pub channel_capacity: usize,
    /// Events buffered per change-feed subscriber before it lags.
    pub event_capacity: usize,
    pub ordering_window: Option<OrderingWindow>,
    /// JSON menu to seed from; the built-in menu is used when unset.
    pub menu_path: Option<PathBuf>,
}

impl Default for CanteenConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            channel_capacity: 100,
            event_capacity: 256,
            ordering_window: Some(OrderingWindow::default()),
            menu_path: None,
        }
    }
}

impl CanteenConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_attempts: u32 = try_load(&lookup, "CANTEEN_MAX_ATTEMPTS", "5")?;
        if max_attempts == 0 {
            return Err(invalid("CANTEEN_MAX_ATTEMPTS", "0", "must be at least 1"));
        }
        let base_backoff_ms: u64 = try_load(&lookup, "CANTEEN_RETRY_BACKOFF_MS", "10")?;
        let max_backoff_ms: u64 = try_load(&lookup, "CANTEEN_RETRY_BACKOFF_MAX_MS", "200")?;

        let enforce_window: bool = try_load(&lookup, "CANTEEN_ENFORCE_WINDOW", "true")?;
        let start = load_time(&lookup, "CANTEEN_WINDOW_START", "07:25")?;
        let end = load_time(&lookup, "CANTEEN_WINDOW_END", "12:45")?;
        if end < start {
            return Err(invalid(
                "CANTEEN_WINDOW_END",
                &end.format("%H:%M").to_string(),
                "ends before CANTEEN_WINDOW_START",
            ));
        }

        Ok(Self {
            retry: RetryPolicy {
                max_attempts,
                base_backoff: Duration::from_millis(base_backoff_ms),
                max_backoff: Duration::from_millis(max_backoff_ms.max(base_backoff_ms)),
            },
            channel_capacity: try_load(&lookup, "CANTEEN_CHANNEL_CAPACITY", "100")?,
            event_capacity: try_load(&lookup, "CANTEEN_EVENT_CAPACITY", "256")?,
            ordering_window: enforce_window.then(|| OrderingWindow::new(start, end)),
            menu_path: lookup("CANTEEN_MENU_PATH").map(PathBuf::from),
        })
    }
}

fn invalid(key: &'static str, value: &str, reason: impl Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn raw<F>(lookup: &F, key: &'static str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        debug!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = raw(lookup, key, default);
    value.trim().parse().map_err(|e| invalid(key, &value, e))
}

fn load_time<F>(lookup: &F, key: &'static str, default: &str) -> Result<NaiveTime, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = raw(lookup, key, default);
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| invalid(key, &value, e))?;
    info!("{key} = {}", time.format("%H:%M"));
    Ok(time)
}
