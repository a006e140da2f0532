//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | WORK_DIR | ./data | Database and log files |
//! | HTTP_PORT | 8080 | HTTP listen port |
//! | LOG_LEVEL | info | Tracing level filter |
//! | LOG_DIR | (unset) | Daily-rolling log files when set |
//! | ENVIRONMENT | development | development \| staging \| production |

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the sheet database
    pub work_dir: PathBuf,
    /// HTTP API port
    pub http_port: u16,
    /// Tracing level
    pub log_level: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
    /// Runtime environment name
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Path of the redb database file.
    pub fn db_path(&self) -> PathBuf {
        self.work_dir.join("sheet.redb")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
