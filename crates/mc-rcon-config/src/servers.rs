//! Server configuration definitions and management.

use crate::error::{ConfigError, Result};
use crate::config_struct;
use std::collections::HashMap;
use std::path::Path;

config_struct! {
    /// Connection details for a single RCON endpoint.
    pub struct RconServerConfig {
        /// Server hostname
        pub host: String = "localhost".to_string(),
        /// RCON port
        pub port: u16 = 25575,
        /// RCON password (consider using environment variables)
        pub password: Option<String> = None,
        /// Whether this server is enabled
        pub enabled: bool = true,
    }
}

config_struct! {
    /// Global servers configuration.
    pub struct ServersConfig {
        /// Version of the configuration format
        pub version: String = "1.0.0".to_string(),
        /// Map of server ID to server configuration
        pub servers: HashMap<String, RconServerConfig> = HashMap::new(),
        /// Default server ID to use
        pub default_server: Option<String> = None,
    }
}

impl RconServerConfig {
    /// Creates a new server configuration for the given endpoint.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Returns the `host:port` address of this endpoint.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the server configuration.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ConfigError::invalid_config(
                "host",
                "Server host cannot be empty",
                None,
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::invalid_config(
                "port",
                "Server port cannot be zero",
                None,
            ));
        }

        Ok(())
    }
}

impl ServersConfig {
    /// Loads configuration from directory.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join("servers.toml");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file).map_err(|e| {
                ConfigError::io_error(
                    "read servers config",
                    format!("Failed to read servers.toml: {}", e),
                    Some(e),
                )
            })?;

            toml::from_str(&content).map_err(|e| {
                ConfigError::serialization_error(
                    "TOML",
                    format!("Failed to parse servers.toml: {}", e),
                    Some(Box::new(e)),
                )
            })
        } else {
            // Create default config file
            let default_config = Self::default();
            default_config.save(config_dir)?;
            Ok(default_config)
        }
    }

    /// Saves configuration to directory.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_file = config_dir.join("servers.toml");

        let content = toml::to_string_pretty(self).map_err(|e| {
            ConfigError::serialization_error(
                "TOML",
                format!("Failed to serialize servers config: {}", e),
                Some(Box::new(e)),
            )
        })?;

        std::fs::write(&config_file, content).map_err(|e| {
            ConfigError::io_error(
                "write servers config",
                format!("Failed to write servers.toml: {}", e),
                Some(e),
            )
        })?;

        Ok(())
    }

    /// Validates all server configurations.
    pub fn validate(&self) -> Result<()> {
        for (id, server) in &self.servers {
            server.validate().map_err(|e| {
                ConfigError::invalid_config(
                    format!("servers.{}", id),
                    "Server entry failed validation",
                    Some(Box::new(e)),
                )
            })?;
        }

        if let Some(default) = &self.default_server {
            if !self.servers.contains_key(default) {
                return Err(ConfigError::ServerNotFound {
                    server_id: default.clone(),
                    cause: None,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_address() {
        let server = RconServerConfig::new("mc.example.com", 25575);
        assert_eq!(server.address(), "mc.example.com:25575");
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let server = RconServerConfig::new("", 25575);
        assert!(server.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_default() {
        let config = ServersConfig {
            default_server: Some("missing".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_known_default() {
        let mut config = ServersConfig::default();
        config
            .servers
            .insert("main".to_string(), RconServerConfig::default());
        config.default_server = Some("main".to_string());
        assert!(config.validate().is_ok());
    }
}
