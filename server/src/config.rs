//! Server configuration parsed from environment variables.

use std::time::Duration;

use crate::services::login::SessionWritePolicy;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SUPABASE_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SUPABASE_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 8 * 60 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupabaseTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub timeouts: SupabaseTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub supabase: SupabaseConfig,
    pub session_ttl: Duration,
    pub session_write: SessionWritePolicy,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `SUPABASE_URL` (or `VITE_SUPABASE_URL`)
    /// - `SUPABASE_ANON_KEY` (or `VITE_SUPABASE_ANON_KEY`)
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SUPABASE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SUPABASE_CONNECT_TIMEOUT_SECS`: default 10
    /// - `SESSION_TTL_SECS`: default 28800
    /// - `REQUIRE_SESSION_RECORD`: block login when the session row cannot be written
    /// - `APP_URL`: public origin tellers use to reach this server
    /// - `COOKIE_SECURE`: defaults to whether `APP_URL` is `https://`, else off
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = first_present(&lookup, &["SUPABASE_URL", "VITE_SUPABASE_URL"])
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?
            .trim_end_matches('/')
            .to_owned();
        let anon_key = first_present(&lookup, &["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"])
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let timeouts = SupabaseTimeouts {
            request: Duration::from_secs(parse_or(
                &lookup,
                "SUPABASE_REQUEST_TIMEOUT_SECS",
                DEFAULT_SUPABASE_REQUEST_TIMEOUT_SECS,
            )?),
            connect: Duration::from_secs(parse_or(
                &lookup,
                "SUPABASE_CONNECT_TIMEOUT_SECS",
                DEFAULT_SUPABASE_CONNECT_TIMEOUT_SECS,
            )?),
        };
        let session_ttl = Duration::from_secs(parse_or(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?);

        let session_write = if parse_bool(&lookup, "REQUIRE_SESSION_RECORD")?.unwrap_or(false) {
            SessionWritePolicy::Required
        } else {
            SessionWritePolicy::BestEffort
        };
        let cookie_secure = match parse_bool(&lookup, "COOKIE_SECURE")? {
            Some(secure) => secure,
            None => first_present(&lookup, &["APP_URL"])
                .is_some_and(|app_url| app_url.starts_with("https://")),
        };

        Ok(Self {
            port,
            supabase: SupabaseConfig { url, anon_key, timeouts },
            session_ttl,
            session_write,
            cookie_secure,
        })
    }
}

fn first_present<F>(lookup: &F, keys: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|key| lookup(key))
        .map(|v| v.trim().to_owned())
        .find(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

pub(crate) fn parse_bool_value(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => parse_bool_value(&raw)
            .map(Some)
            .ok_or(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
