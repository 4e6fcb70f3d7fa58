use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::error::ConfigError;

const DEFAULT_IP: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8080;

/// Address the catalog HTTP listener binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = match lookup("SERVICE_IP") {
            None => DEFAULT_IP,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "SERVICE_IP",
                value: raw.clone(),
                reason: "not an IP address".to_string(),
            })?,
        };
        let port = match lookup("SERVICE_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "SERVICE_PORT",
                value: raw.clone(),
                reason: "not a port number".to_string(),
            })?,
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        SocketAddr::new(self.ip, self.port).to_string()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP,
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_port_8080() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_read_ip_and_port_overrides() {
        let config = ServerConfig::from_lookup(|name| match name {
            "SERVICE_IP" => Some("0.0.0.0".to_string()),
            "SERVICE_PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn should_reject_invalid_port() {
        let result = ServerConfig::from_lookup(|name| {
            (name == "SERVICE_PORT").then(|| "eighty".to_string())
        });

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                name: "SERVICE_PORT",
                ..
            })
        ));
    }
}
