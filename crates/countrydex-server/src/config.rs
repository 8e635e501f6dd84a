//! Server configuration
//!
//! Settings come from three layers, lowest precedence first: built-in
//! defaults, an optional TOML file, then command line flags (each flag can
//! also be set through a `COUNTRYDEX_*` environment variable).

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default level filter (overridden by RUST_LOG)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind: SocketAddr,
    /// Logging settings
    pub log: LogSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log: LogSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Resolve the effective configuration for a command line invocation
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(level) = &cli.log_level {
            config.log.level = level.clone();
        }
        if let Some(format) = cli.log_format {
            config.log.format = format;
        }
        if let Some(Command::Serve { bind, port }) = &cli.command {
            if let Some(bind) = bind {
                config.bind = *bind;
            }
            if let Some(port) = port {
                config.bind.set_port(*port);
            }
        }

        Ok(config)
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "countrydex",
    version,
    about = "Country code lookup and validation service"
)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "COUNTRYDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "COUNTRYDEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, env = "COUNTRYDEX_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Socket address to bind, e.g. 0.0.0.0:5000
        #[arg(long, env = "COUNTRYDEX_BIND")]
        bind: Option<SocketAddr>,
        /// Port to bind, keeping the configured host
        #[arg(long, env = "COUNTRYDEX_PORT")]
        port: Option<u16>,
    },
    /// Validate a single country code and print the result as JSON
    Validate {
        /// Alpha-2 or alpha-3 code, optionally prefixed with '+'
        code: String,
    },
    /// Print the country catalog as JSON
    List {
        /// Only include countries on this continent (NA, EU, AS, AF, OC, SA)
        #[arg(long)]
        continent: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml(
            r#"
            [log]
            format = "json"
            "#,
            Path::new("inline.toml"),
        )
        .unwrap();
        assert_eq!(config.bind, ServerConfig::default().bind);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_full_toml() {
        let config = ServerConfig::from_toml(
            r#"
            bind = "0.0.0.0:8080"

            [log]
            level = "debug"
            format = "pretty"
            "#,
            Path::new("inline.toml"),
        )
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = ServerConfig::from_toml("bind = 42", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ServerConfig::from_file(Path::new("/nonexistent/countrydex.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countrydex.toml");
        std::fs::write(&path, "bind = \"0.0.0.0:8080\"\n[log]\nlevel = \"warn\"\n").unwrap();

        let cli = Cli::parse_from([
            "countrydex",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "debug",
            "serve",
            "--port",
            "9000",
        ]);
        let config = ServerConfig::resolve(&cli).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_cli_without_subcommand() {
        let cli = Cli::parse_from(["countrydex"]);
        assert!(cli.command.is_none());
        let config = ServerConfig::resolve(&cli).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_validate_subcommand() {
        let cli = Cli::parse_from(["countrydex", "validate", "+gb"]);
        assert!(matches!(cli.command, Some(Command::Validate { ref code }) if code == "+gb"));
    }
}
