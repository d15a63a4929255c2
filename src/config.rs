use std::{env, net::SocketAddr};

use anyhow::Result;
use tracing::warn;

use crate::models::{MAX_GENERATION, MIN_GENERATION};

const DEFAULT_BIND: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub default_generation: i32,
    pub max_path_len: usize,
    pub max_query_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND),
            default_generation: 1,
            max_path_len: 16,
            max_query_len: 256,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("KINSHIP_BIND_ADDR")
            .map(|raw| parse_bind_addr(&raw))
            .unwrap_or(defaults.bind_addr);

        let default_generation = parse_or(
            "KINSHIP_DEFAULT_GENERATION",
            lookup("KINSHIP_DEFAULT_GENERATION"),
            defaults.default_generation,
        )
        .clamp(MIN_GENERATION, MAX_GENERATION);

        let max_path_len = parse_or(
            "KINSHIP_MAX_PATH_LEN",
            lookup("KINSHIP_MAX_PATH_LEN"),
            defaults.max_path_len,
        )
        .max(1);

        let max_query_len = parse_or(
            "KINSHIP_MAX_QUERY_LEN",
            lookup("KINSHIP_MAX_QUERY_LEN"),
            defaults.max_query_len,
        )
        .max(1);

        Self {
            bind_addr,
            default_generation,
            max_path_len,
            max_query_len,
        }
    }
}

fn normalize(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim_matches('\'')
}

fn parse_bind_addr(raw: &str) -> SocketAddr {
    normalize(raw).parse::<SocketAddr>().unwrap_or_else(|_| {
        warn!(value = %raw, "Invalid KINSHIP_BIND_ADDR, using default");
        SocketAddr::from(DEFAULT_BIND)
    })
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    match normalize(&raw).parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "Unparsable config value, using default");
            default
        }
    }
}
