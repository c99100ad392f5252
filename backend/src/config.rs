use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SCHEDULER_ADDR {value:?}: {source}")]
    Addr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Server settings, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Expected `Authorization` header. Empty disables the check.
    pub token: String,
    pub static_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("SCHEDULER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let addr = addr
            .parse()
            .map_err(|source| ConfigError::Addr { value: addr.clone(), source })?;

        Ok(Self {
            addr,
            token: lookup("SCHEDULER_TOKEN").unwrap_or_default(),
            static_dir: lookup("SCHEDULER_STATIC_DIR").unwrap_or_else(|| "frontend/dist".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert!(config.token.is_empty());
        assert_eq!(config.static_dir, "frontend/dist");
    }

    #[test]
    fn rejects_bad_address() {
        let result = ServerConfig::from_lookup(|key| {
            (key == "SCHEDULER_ADDR").then(|| "not an address".to_string())
        });
        assert!(matches!(result, Err(ConfigError::Addr { .. })));
    }
}
