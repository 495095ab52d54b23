//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export ENTRIES_DIR="entries"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Optional Variables
//!
//! - `ENTRIES_DIR` - Directory of `<title>.md` entry files (default: `entries`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one Markdown file per entry. Created at startup if missing.
    pub entries_dir: PathBuf,
    pub static_dir: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Result<Self> {
        let entries_dir = env::var("ENTRIES_DIR").unwrap_or_else(|_| "entries".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            entries_dir: PathBuf::from(entries_dir),
            static_dir: PathBuf::from(static_dir),
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `entries_dir` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not an `ip:port` socket address
    pub fn validate(&self) -> Result<()> {
        if self.entries_dir.as_os_str().is_empty() {
            anyhow::bail!("ENTRIES_DIR must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be a socket address like '0.0.0.0:3000', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Entries directory: {}", self.entries_dir.display());
        tracing::info!("  Static directory: {}", self.static_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            entries_dir: PathBuf::from("entries"),
            static_dir: PathBuf::from("static"),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        // Host names are not resolved
        config.listen_addr = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8000".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "[::1]:8000".to_string();
        assert!(config.validate().is_ok());

        // Test empty entries directory
        config.entries_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("ENTRIES_DIR");
            env::remove_var("STATIC_DIR");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.entries_dir, PathBuf::from("entries"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_overrides_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("ENTRIES_DIR", "/srv/wiki");
            env::set_var("LISTEN", "127.0.0.1:8000");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.entries_dir, PathBuf::from("/srv/wiki"));
        assert_eq!(config.listen_addr, "127.0.0.1:8000");
        assert!(config.is_json_logging());

        // Cleanup
        unsafe {
            env::remove_var("ENTRIES_DIR");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_log_format() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        let result = load_from_env();

        assert!(result.is_err());

        // Cleanup
        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
