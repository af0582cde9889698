use crate::errors::ServerError;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Number of cards shown before "Load more".
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            page_size: 12,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` in development).
    pub fn from_env() -> Result<Self, ServerError> {
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("ATOG_BIND_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                ServerError::ConfigError(format!("ATOG_BIND_ADDR '{raw}' is invalid: {e}"))
            })?,
            None => defaults.bind_addr,
        };

        let max_workers = parse_positive(&lookup, "ATOG_MAX_WORKERS", defaults.max_workers)?;
        let page_size = parse_positive(&lookup, "ATOG_PAGE_SIZE", defaults.page_size)?;

        Ok(Self {
            bind_addr,
            max_workers,
            page_size,
        })
    }
}

fn parse_positive<F>(lookup: &F, key: &str, default: usize) -> Result<usize, ServerError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ServerError::ConfigError(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_use_defaults() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.page_size, 12);
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("ATOG_BIND_ADDR", "0.0.0.0:8080"),
            ("ATOG_MAX_WORKERS", "4"),
            ("ATOG_PAGE_SIZE", " 24 "),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.max_workers, 4);
        assert_eq!(cfg.page_size, 24);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        let err = Config::from_lookup(lookup_from(&[("ATOG_PAGE_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, ServerError::ConfigError(_)));

        let err = Config::from_lookup(lookup_from(&[("ATOG_BIND_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, ServerError::ConfigError(_)));
    }
}
