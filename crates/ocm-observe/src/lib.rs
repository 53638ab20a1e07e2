//! Logging setup shared by the ocm binaries.
//!
//! All crates log through `tracing` macros; this crate only decides where the
//! events go. Call [`init_logger`] once, early in `main`.
mod config;
pub use config::{LOG_ENV_VAR, LoggerConfig};

mod error;
pub use error::{LoggerError, LoggerResult};

mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod install;
mod timer;

/// Installs the global tracing subscriber described by `cfg`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a global subscriber is
/// already set.
///
/// # Examples
/// ```rust
/// use ocm_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger");
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::text(cfg),
        LoggerFormat::Json => install::json(cfg),
    }
}
