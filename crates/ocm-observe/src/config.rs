use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{LoggerFormat, LoggerLevel, LoggerResult};

/// Environment variable that overrides [`LoggerConfig::level`].
pub const LOG_ENV_VAR: &str = "OCM_LOG";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter directives (e.g. `"info"`, `"ocm_core=debug,info"`).
    pub level: LoggerLevel,
    /// Include event targets (module paths).
    pub with_targets: bool,
    /// Colored output; only honoured when stderr is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Whether ANSI colors should be emitted right now.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }

    /// Replace `level` with the given directive string when one is set.
    ///
    /// Typically fed with `std::env::var(LOG_ENV_VAR).ok()`.
    pub fn with_level_override(mut self, directives: Option<String>) -> LoggerResult<Self> {
        if let Some(d) = directives.filter(|d| !d.trim().is_empty()) {
            self.level = LoggerLevel::new(d)?;
        }
        Ok(self)
    }
}
