//! Configuration loading and hierarchy management
//!
//! Precedence: CLI > environment > file > defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::TrimSettings;
use crate::error::{CleanCutError, CleanCutResult};
use crate::output::OutputFormat;
use crate::utils::logging::LogFormat;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "cleancut.toml";

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
    pub output_suffix: String,
    pub default_extension: String,
    /// Prompts allowed in interactive mode before giving up
    pub max_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            output_format: OutputFormat::Text,
            output_suffix: "(Clean Movie)".to_string(),
            default_extension: "mp4".to_string(),
            max_attempts: 3,
        }
    }
}

/// `[cleancut]` table of the config file, every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    log_level: Option<String>,
    log_format: Option<LogFormat>,
    output_format: Option<OutputFormat>,
    output_suffix: Option<String>,
    default_extension: Option<String>,
    max_attempts: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    cleancut: Option<PartialConfig>,
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub output_format: Option<OutputFormat>,
}

impl AppConfig {
    /// Load defaults, then the config file, then environment variables.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(explicit_path: Option<&Path>) -> CleanCutResult<Self> {
        let mut config = Self::default();

        let path = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };

        if let Some(path) = path {
            debug!("Loading configuration from: {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            config.apply_toml(&content)?;
        }

        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Merge the `[cleancut]` table of a TOML document
    pub fn apply_toml(&mut self, content: &str) -> CleanCutResult<()> {
        let file: ConfigFile = toml::from_str(content)?;
        let Some(partial) = file.cleancut else {
            return Ok(());
        };

        if let Some(level) = partial.log_level {
            self.log_level = level;
        }
        if let Some(format) = partial.log_format {
            self.log_format = format;
        }
        if let Some(format) = partial.output_format {
            self.output_format = format;
        }
        if let Some(suffix) = partial.output_suffix {
            self.output_suffix = suffix;
        }
        if let Some(extension) = partial.default_extension {
            self.default_extension = extension;
        }
        if let Some(attempts) = partial.max_attempts {
            self.max_attempts = attempts;
        }
        Ok(())
    }

    /// Merge `CLEANCUT_*` variables read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> CleanCutResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut overrides = 0;

        if let Some(level) = lookup("CLEANCUT_LOG_LEVEL") {
            self.log_level = level;
            overrides += 1;
        }
        if let Some(format) = lookup("CLEANCUT_LOG_FORMAT") {
            self.log_format = LogFormat::parse(&format)?;
            overrides += 1;
        }
        if let Some(format) = lookup("CLEANCUT_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&format)?;
            overrides += 1;
        }
        if let Some(suffix) = lookup("CLEANCUT_OUTPUT_SUFFIX") {
            self.output_suffix = suffix;
            overrides += 1;
        }
        if let Some(extension) = lookup("CLEANCUT_DEFAULT_EXTENSION") {
            self.default_extension = extension;
            overrides += 1;
        }
        if let Some(attempts) = lookup("CLEANCUT_MAX_ATTEMPTS") {
            self.max_attempts = attempts.trim().parse().map_err(|_| CleanCutError::ConfigError {
                message: format!("CLEANCUT_MAX_ATTEMPTS must be a positive integer, got '{}'", attempts),
            })?;
            overrides += 1;
        }

        if overrides > 0 {
            debug!("Applied {} environment variable overrides", overrides);
        }
        Ok(())
    }

    /// Apply command-line values, highest precedence
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(level) = &overrides.log_level {
            self.log_level = level.clone();
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
        if let Some(format) = overrides.output_format {
            self.output_format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CleanCutResult<()> {
        if self.max_attempts == 0 {
            return Err(CleanCutError::ConfigError {
                message: "max_attempts must be at least 1".to_string(),
            });
        }
        if self.default_extension.trim_start_matches('.').trim().is_empty() {
            return Err(CleanCutError::ConfigError {
                message: "default_extension cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Naming settings for the trim interactor
    pub fn trim_settings(&self) -> TrimSettings {
        TrimSettings {
            output_suffix: self.output_suffix.clone(),
            default_extension: self.default_extension.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_suffix, "(Clean Movie)");
        assert_eq!(config.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_toml() {
        let mut config = AppConfig::default();
        config
            .apply_toml(
                r#"
                [cleancut]
                log_level = "debug"
                output_format = "json"
                output_suffix = "_clean"
                max_attempts = 5
                "#,
            )
            .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.output_suffix, "_clean");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.default_extension, "mp4");
    }

    #[test]
    fn test_apply_toml_rejects_unknown_keys() {
        let mut config = AppConfig::default();
        assert!(matches!(
            config.apply_toml("[cleancut]\nspeed = 2\n"),
            Err(CleanCutError::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::default();
        config.apply_toml("[cleancut]\noutput_suffix = \"_file\"\n").unwrap();

        let env: HashMap<&str, &str> = [
            ("CLEANCUT_OUTPUT_SUFFIX", "_env"),
            ("CLEANCUT_LOG_FORMAT", "json"),
            ("CLEANCUT_MAX_ATTEMPTS", "7"),
        ]
        .into_iter()
        .collect();
        config
            .apply_env_with(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.output_suffix, "_env");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.max_attempts, 7);
    }

    #[test]
    fn test_env_invalid_values() {
        let mut config = AppConfig::default();
        assert!(config
            .apply_env_with(|key| (key == "CLEANCUT_MAX_ATTEMPTS").then(|| "many".to_string()))
            .is_err());
        assert!(config
            .apply_env_with(|key| (key == "CLEANCUT_OUTPUT_FORMAT").then(|| "xml".to_string()))
            .is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = AppConfig::default();
        config
            .apply_env_with(|key| (key == "CLEANCUT_LOG_LEVEL").then(|| "warn".to_string()))
            .unwrap();
        config.apply_overrides(&CliOverrides {
            log_level: Some("trace".to_string()),
            log_format: None,
            output_format: Some(OutputFormat::Yaml),
        });

        assert_eq!(config.log_level, "trace");
        assert_eq!(config.output_format, OutputFormat::Yaml);
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = AppConfig {
            max_attempts: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cleancut]\ndefault_extension = \"mkv\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_extension, "mkv");
        assert_eq!(config.trim_settings().default_extension, "mkv");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(CleanCutError::IoError(_))
        ));
    }
}
