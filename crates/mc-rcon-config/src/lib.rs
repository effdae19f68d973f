//! RCON server administration configuration system.
//!
//! This module provides a unified configuration system for administering
//! game servers over RCON, including named server endpoints, logging
//! settings and the external fortune tool configuration.

#![cfg_attr(not(debug_assertions), forbid(missing_docs))]

pub mod admin;
pub mod error;
pub mod macros;
pub mod prelude;
pub mod servers;

use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::sync::LazyLock;

pub use admin::*;
pub use error::*;
pub use servers::*;

/// Project directories for mc-rcon.
pub static PROJECT_DIRS: LazyLock<ProjectDirs> = LazyLock::new(|| {
    if let Some(dirs) = ProjectDirs::from("com", "mc-rcon", "mc-rcon") {
        dirs
    } else {
        eprintln!(
            "Failed to determine project directories. Ensure your environment supports directories."
        );
        exit(1);
    }
});

/// Global configuration manager instance.
pub static CONFIG_MANAGER: LazyLock<ConfigManager> = LazyLock::new(|| {
    match ConfigManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Failed to initialize configuration manager: {}", e);
            exit(1);
        }
    }
});

/// Main configuration manager for RCON server administration.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub admin: AdminConfig,
    servers_config: ServersConfig,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new configuration manager with default directory.
    pub fn new() -> Result<Self> {
        Self::from_dir(None)
    }

    /// Creates a configuration manager from a specific directory.
    pub fn from_dir(config_dir: Option<&Path>) -> Result<Self> {
        let config_dir = config_dir
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PROJECT_DIRS.config_dir().to_path_buf());

        // Ensure the config directory exists
        std::fs::create_dir_all(&config_dir).map_err(|e| {
            ConfigError::io_error(
                "create config directory",
                format!("Failed to create config directory: {}", e),
                Some(e),
            )
        })?;

        let admin = AdminConfig::load(&config_dir)?;
        let servers_config = ServersConfig::load(&config_dir)?;

        Ok(Self {
            admin,
            servers_config,
            config_dir,
        })
    }

    /// Gets a reference to the admin configuration.
    pub fn admin(&self) -> &AdminConfig {
        &self.admin
    }

    /// Gets a mutable reference to the admin configuration.
    pub fn admin_mut(&mut self) -> &mut AdminConfig {
        &mut self.admin
    }

    /// Gets a reference to the servers configuration.
    pub fn servers(&self) -> &ServersConfig {
        &self.servers_config
    }

    /// Gets a mutable reference to the servers configuration.
    pub fn servers_mut(&mut self) -> &mut ServersConfig {
        &mut self.servers_config
    }

    /// Gets the configuration directory path.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Saves all configuration to disk.
    pub fn save(&self) -> Result<()> {
        self.admin.save(&self.config_dir)?;
        self.servers_config.save(&self.config_dir)?;
        Ok(())
    }

    /// Gets a server configuration by ID.
    pub fn get_server(&self, server_id: &str) -> Option<&RconServerConfig> {
        self.servers_config.servers.get(server_id)
    }

    /// Gets the configured default server, if any.
    pub fn default_server(&self) -> Option<&RconServerConfig> {
        self.servers_config
            .default_server
            .as_deref()
            .and_then(|id| self.get_server(id))
    }

    /// Adds or updates a server configuration.
    pub fn add_server(&mut self, server_id: impl Into<String>, server: RconServerConfig) {
        self.servers_config.servers.insert(server_id.into(), server);
    }

    /// Removes a server configuration.
    pub fn remove_server(&mut self, server_id: &str) -> Option<RconServerConfig> {
        self.servers_config.servers.remove(server_id)
    }

    /// Lists all server IDs.
    pub fn list_servers(&self) -> Vec<&str> {
        self.servers_config
            .servers
            .keys()
            .map(|s| s.as_str())
            .collect()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new().expect("Failed to create default config manager")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_config_files() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::from_dir(Some(dir.path())).unwrap();

        assert!(dir.path().join("admin.toml").exists());
        assert!(dir.path().join("servers.toml").exists());
        assert_eq!(manager.list_servers().len(), 0);
        assert!(!manager.admin().log_to_stdout);
    }

    #[test]
    fn test_round_trips_server_entries() {
        let dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::from_dir(Some(dir.path())).unwrap();
        manager.add_server("main", RconServerConfig::new("mc.example.com", 25575));
        manager.servers_mut().default_server = Some("main".to_string());
        manager.save().unwrap();

        let reloaded = ConfigManager::from_dir(Some(dir.path())).unwrap();
        let server = reloaded.default_server().expect("default server missing");
        assert_eq!(server.address(), "mc.example.com:25575");
        assert!(reloaded.servers().validate().is_ok());
    }
}
