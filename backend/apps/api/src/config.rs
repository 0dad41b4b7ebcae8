//! Server Configuration
//!
//! Reads listener and users settings from the environment. Unset variables
//! fall back to defaults; set but unparsable ones abort startup.

use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use users::UsersConfig;

/// Default listen port
pub const DEFAULT_PORT: u16 = 9001;

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Load configuration from the process environment
pub fn from_env() -> anyhow::Result<(ServerConfig, UsersConfig)> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup
pub fn from_lookup<F>(lookup: F) -> anyhow::Result<(ServerConfig, UsersConfig)>
where
    F: Fn(&str) -> Option<String>,
{
    let server_defaults = ServerConfig::default();
    let users_defaults = UsersConfig::default();

    let server = ServerConfig {
        host: parse_var(&lookup, "API_HOST", server_defaults.host)?,
        port: parse_var(&lookup, "API_PORT", server_defaults.port)?,
    };

    let users = UsersConfig {
        max_body_bytes: parse_var(
            &lookup,
            "USERS_MAX_BODY_BYTES",
            users_defaults.max_body_bytes,
        )?,
    };

    Ok((server, users))
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has invalid value {raw:?}")),
        None => Ok(default),
    }
}
