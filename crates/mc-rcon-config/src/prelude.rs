//! Prelude module with commonly used configuration types.

pub use crate::admin::{AdminConfig, FortuneConfig, LogFileNameFormat};
pub use crate::error::{ConfigError, Result};
pub use crate::servers::{RconServerConfig, ServersConfig};
pub use crate::{CONFIG_MANAGER, ConfigManager, PROJECT_DIRS};
