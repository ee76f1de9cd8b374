//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "birr_client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file name prefix inside `log_dir`
    pub file_name: String,
    /// Log level filter (e.g., "birr_client=debug,info")
    pub log_level: String,
    /// Mirror events to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: "birr-client.log".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lib_utils::get_env_opt("BIRR_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            file_name: defaults.file_name,
            log_level: lib_utils::get_env_opt("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: lib_utils::get_env_opt("BIRR_LOG_STDERR")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Full path of the current log file (before the rotation date suffix).
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }
}
