use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use mc_rcon_config::FortuneConfig;
use mc_rcon_core::{RconError, Result};
use tokio::process::Command;

/// Flag selection for the external fortune tool.
#[derive(Debug, Clone)]
pub struct FortuneOptions {
    /// Request short fortunes (`-s`)
    pub short: bool,
    /// Allow potentially offensive fortunes (`-o`)
    pub offensive: bool,
}

impl Default for FortuneOptions {
    fn default() -> Self {
        Self {
            short: true,
            offensive: false,
        }
    }
}

impl FortuneOptions {
    /// Creates options from the fortune configuration.
    pub fn from_config(config: &FortuneConfig) -> Self {
        Self {
            short: config.short,
            offensive: config.offensive,
        }
    }

    fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();

        if self.short {
            flags.push("-s");
        }

        if self.offensive {
            flags.push("-o");
        }

        flags
    }
}

/// Capability for obtaining fortune text.
///
/// Keeping the subprocess behind this trait lets callers exercise the
/// client's control flow without spawning real processes.
pub trait FortuneSource: Send + Sync {
    /// Generates one block of fortune text.
    fn generate(&self, options: &FortuneOptions) -> impl Future<Output = Result<String>> + Send;
}

/// Fortune source backed by an external `fortune`-style binary.
pub struct FortuneCommand {
    binary: PathBuf,
}

impl FortuneCommand {
    /// Creates a fortune source for the given binary.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Creates a fortune source from the fortune configuration.
    pub fn from_config(config: &FortuneConfig) -> Self {
        Self::new(config.binary.clone())
    }

    fn tool(&self) -> String {
        self.binary.display().to_string()
    }
}

impl FortuneSource for FortuneCommand {
    fn generate(&self, options: &FortuneOptions) -> impl Future<Output = Result<String>> + Send {
        let flags = options.flags();

        async move {
            let output = Command::new(&self.binary)
                .args(&flags)
                .output()
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => RconError::ToolUnavailable { tool: self.tool() },
                    _ => RconError::Io(e),
                })?;

            if !output.status.success() {
                return Err(RconError::ToolFailed {
                    tool: self.tool(),
                    reason: String::from_utf8_lossy(&output.stderr).into_owned(),
                });
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_are_short_only() {
        assert_eq!(FortuneOptions::default().flags(), vec!["-s"]);
    }

    #[test]
    fn test_all_flags() {
        let options = FortuneOptions {
            short: true,
            offensive: true,
        };

        assert_eq!(options.flags(), vec!["-s", "-o"]);
    }

    #[test]
    fn test_no_flags() {
        let options = FortuneOptions {
            short: false,
            offensive: false,
        };

        assert!(options.flags().is_empty());
    }

    #[tokio::test]
    async fn test_missing_binary_reports_unavailable() {
        let source = FortuneCommand::new("/nonexistent/fortune-binary");
        let result = source.generate(&FortuneOptions::default()).await;

        assert!(matches!(result, Err(RconError::ToolUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_nonzero_exit_reports_failure() {
        let source = FortuneCommand::new("false");
        let result = source.generate(&FortuneOptions::default()).await;

        assert!(matches!(result, Err(RconError::ToolFailed { .. })));
    }
}
