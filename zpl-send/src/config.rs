//! Send configuration
//!
//! Values come from a JSON config file when one is present, from
//! environment variables otherwise.
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | ZPL_SEND_CONFIG | - | path to a JSON config file |
//! | PRINTER_HOST | (required) | printer address |
//! | PRINTER_PORT | 9100 | raw printing port |
//! | SEND_TIMEOUT_MS | 10000 | connect/write bound (milliseconds) |
//! | ZPL_FILE | (stdin) | payload file |

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use zpl_printer::RAW_PRINT_PORT;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CONFIG_FILE: &str = "zpl-send.json";

fn default_port() -> u16 {
    RAW_PRINT_PORT
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Destination and payload source for one send
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Printer address (DNS name or IP literal)
    pub host: String,
    /// Raw printing port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bound on the connect phase and on the write phase, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Payload file; stdin is read when absent
    #[serde(default)]
    pub zpl_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration
    ///
    /// Precedence: the file named by `ZPL_SEND_CONFIG`, then
    /// `./zpl-send.json` when it exists, then environment variables.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("ZPL_SEND_CONFIG") {
            return Self::from_file(Path::new(&path));
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }

        Self::from_env()
    }

    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("PRINTER_HOST")
            .context("PRINTER_HOST is not set and no config file was found")?;

        Ok(Self {
            host,
            port: std::env::var("PRINTER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(RAW_PRINT_PORT),
            timeout_ms: std::env::var("SEND_TIMEOUT_MS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            zpl_file: std::env::var("ZPL_FILE").ok().map(PathBuf::from),
        })
    }

    /// Load from a JSON config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// The connect/write bound as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("zpl-send.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_from_file_full() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"host": "10.50.10.92", "port": 9101, "timeout_ms": 2500, "zpl_file": "label.zpl"}"#,
        );

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.host, "10.50.10.92");
        assert_eq!(config.port, 9101);
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        assert_eq!(config.zpl_file, Some(PathBuf::from("label.zpl")));
    }

    #[test]
    fn test_from_file_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"host": "printer.local"}"#);

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.host, "printer.local");
        assert_eq!(config.port, 9100);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.zpl_file, None);
    }

    #[test]
    fn test_from_file_missing_host() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"port": 9100}"#);

        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_from_file_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.json");

        assert!(Config::from_file(&path).is_err());
    }
}
