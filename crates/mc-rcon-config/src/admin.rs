use crate::{ConfigError, config_enum, config_struct};
use std::path::Path;

config_enum! {
    pub enum LogFileNameFormat {
        Date,
        Timestamp,
        DateTime,
        None,
    }
    default = DateTime
}

config_struct! {
    /// Settings for the external fortune text generator.
    pub struct FortuneConfig {
        /// Name or path of the fortune binary
        pub binary: String = "fortune".to_string(),
        /// Request short fortunes
        pub short: bool = true,
        /// Allow potentially offensive fortunes
        pub offensive: bool = false,
    }
}

config_struct! {
    pub struct AdminConfig {
        pub log_file: LogFileNameFormat = LogFileNameFormat::default(),
        /// whether to log to stdout in addition to file
        pub log_to_stdout: bool = false,
        /// fortune subprocess settings
        pub fortune: FortuneConfig = FortuneConfig::default(),
    }
}

impl AdminConfig {
    /// Loads configuration from directory.
    pub fn load(config_dir: &Path) -> crate::Result<Self> {
        let config_file = config_dir.join("admin.toml");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file).map_err(|e| {
                ConfigError::io_error(
                    "read admin config",
                    format!("Failed to read admin.toml: {}", e),
                    Some(e),
                )
            })?;

            toml::from_str(&content).map_err(|e| {
                ConfigError::serialization_error(
                    "TOML",
                    format!("Failed to parse admin.toml: {}", e),
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
    pub fn save(&self, config_dir: &Path) -> crate::Result<()> {
        let config_file = config_dir.join("admin.toml");

        let content = toml::to_string_pretty(self).map_err(|e| {
            ConfigError::serialization_error(
                "TOML",
                format!("Failed to serialize admin config: {}", e),
                Some(Box::new(e)),
            )
        })?;

        std::fs::write(&config_file, content).map_err(|e| {
            ConfigError::io_error(
                "write admin config",
                format!("Failed to write admin.toml: {}", e),
                Some(e),
            )
        })?;

        Ok(())
    }

    /// Validates the admin configuration.
    pub fn validate(&self) -> crate::Result<()> {
        if self.fortune.binary.is_empty() {
            return Err(ConfigError::invalid_config(
                "fortune.binary",
                "Fortune binary cannot be empty",
                None,
            ));
        }

        Ok(())
    }
}
